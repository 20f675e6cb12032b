//! Customers service errors.

use sqlx::{Error, error::ErrorKind};
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::{
    customers::{
        sorting::UnknownSortKey,
        uniqueness::{Conflicts, UniqueField},
    },
    pagination::PageRequestError,
    validation::messages,
};

#[derive(Debug, Error)]
pub enum CustomersServiceError {
    #[error("{0} customer does not exist")]
    NotFound(String),

    #[error("Duplicate fields: {0} - customer already exists")]
    AlreadyExists(Conflicts),

    #[error("validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    #[error("unknown sort key \"{0}\"")]
    InvalidSortKey(String),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CustomersServiceError {
    fn from(error: Error) -> Self {
        let Some(database_error) = error.as_database_error() else {
            return Self::Sql(error);
        };

        match database_error.kind() {
            ErrorKind::UniqueViolation => {
                match database_error
                    .constraint()
                    .and_then(UniqueField::from_constraint)
                {
                    Some(field) => Self::AlreadyExists(Conflicts::single(field)),
                    None => Self::Sql(error),
                }
            }
            _ => Self::Sql(error),
        }
    }
}

impl From<PageRequestError> for CustomersServiceError {
    fn from(error: PageRequestError) -> Self {
        Self::ValidationFailed(vec![error.to_string()])
    }
}

impl From<ValidationErrors> for CustomersServiceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::ValidationFailed(messages(&errors))
    }
}

impl From<UnknownSortKey> for CustomersServiceError {
    fn from(error: UnknownSortKey) -> Self {
        Self::InvalidSortKey(error.0)
    }
}
