//! Customer Sort Keys

use std::str::FromStr;

use thiserror::Error;

/// Default sort key when a caller does not supply one.
pub const DEFAULT_SORT_KEY: &str = "id";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sort key \"{0}\"")]
pub struct UnknownSortKey(pub String);

/// Customer fields a listing may be ordered by.
///
/// Parsed from caller input and rendered only as fixed column names, so the
/// resulting `ORDER BY` clause never contains caller text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CustomerSortKey {
    Id,
    UserName,
    Age,
    MobileNumber,
    EmailAddress,
    Address,
    Status,
    CreatedAt,
    UpdatedAt,
}

impl CustomerSortKey {
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::UserName => "user_name",
            Self::Age => "age",
            Self::MobileNumber => "mobile_number",
            Self::EmailAddress => "email_address",
            Self::Address => "address",
            Self::Status => "status",
            Self::CreatedAt => "created_at",
            Self::UpdatedAt => "updated_at",
        }
    }
}

impl FromStr for CustomerSortKey {
    type Err = UnknownSortKey;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "id" => Ok(Self::Id),
            "userName" | "user_name" => Ok(Self::UserName),
            "age" => Ok(Self::Age),
            "mobileNumber" | "mobile_number" => Ok(Self::MobileNumber),
            "emailAddress" | "email_address" => Ok(Self::EmailAddress),
            "address" => Ok(Self::Address),
            "status" => Ok(Self::Status),
            "createdAt" | "created_at" => Ok(Self::CreatedAt),
            "updatedAt" | "updated_at" => Ok(Self::UpdatedAt),
            _ => Err(UnknownSortKey(value.to_string())),
        }
    }
}
