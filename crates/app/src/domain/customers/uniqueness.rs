//! Uniqueness Validator
//!
//! Pre-commit check of the identifying fields. It reports every collision at
//! once; the store's unique constraints stay the authority, and a violation at
//! commit time is mapped back onto the same [`UniqueField`].

use std::fmt;

use smallvec::SmallVec;
use sqlx::{Postgres, Transaction};

use crate::domain::customers::{records::CustomerId, repository::PgCustomersRepository};

/// A customer field that must be unique across every record, whatever its status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UniqueField {
    UserName,
    EmailAddress,
    MobileNumber,
}

impl UniqueField {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UserName => "userName",
            Self::EmailAddress => "emailAddress",
            Self::MobileNumber => "mobileNumber",
        }
    }

    /// Map a store constraint name onto the field it guards.
    #[must_use]
    pub fn from_constraint(constraint: &str) -> Option<Self> {
        match constraint {
            "customers_user_name_key" => Some(Self::UserName),
            "customers_email_address_key" => Some(Self::EmailAddress),
            "customers_mobile_number_key" => Some(Self::MobileNumber),
            _ => None,
        }
    }
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Colliding fields, in report order and without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Conflicts(SmallVec<[UniqueField; 3]>);

impl Conflicts {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn single(field: UniqueField) -> Self {
        let mut conflicts = Self::new();

        conflicts.push(field);
        conflicts
    }

    pub fn push(&mut self, field: UniqueField) {
        if !self.0.contains(&field) {
            self.0.push(field);
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn fields(&self) -> &[UniqueField] {
        &self.0
    }

    #[must_use]
    pub fn contains(&self, field: UniqueField) -> bool {
        self.0.contains(&field)
    }
}

impl fmt::Display for Conflicts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, field) in self.0.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }

            f.write_str(field.as_str())?;
        }

        Ok(())
    }
}

/// Identifying fields of a record about to be written.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'a> {
    pub user_name: Option<&'a str>,
    pub email_address: Option<&'a str>,
    pub mobile_number: Option<&'a str>,
}

/// Check each supplied field against the store, ignoring the record `exclude`
/// (the record being rewritten), and collect every collision.
pub(crate) async fn find_conflicts(
    repository: &PgCustomersRepository,
    tx: &mut Transaction<'_, Postgres>,
    candidate: Candidate<'_>,
    exclude: Option<CustomerId>,
) -> Result<Conflicts, sqlx::Error> {
    let mut conflicts = Conflicts::new();

    if let Some(user_name) = candidate.user_name
        && repository.user_name_exists(tx, user_name, exclude).await?
    {
        conflicts.push(UniqueField::UserName);
    }

    if let Some(email_address) = candidate.email_address
        && repository
            .email_address_exists(tx, email_address, exclude)
            .await?
    {
        conflicts.push(UniqueField::EmailAddress);
    }

    if let Some(mobile_number) = candidate.mobile_number
        && repository
            .mobile_number_exists(tx, mobile_number, exclude)
            .await?
    {
        conflicts.push(UniqueField::MobileNumber);
    }

    Ok(conflicts)
}
