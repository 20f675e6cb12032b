//! Clients service errors.

use sqlx::Error;
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::{clients::records::ClientId, validation::messages};

#[derive(Debug, Error)]
pub enum ClientsServiceError {
    #[error("client {0} does not exist")]
    NotFound(ClientId),

    #[error("validation failed: {}", .0.join("; "))]
    ValidationFailed(Vec<String>),

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for ClientsServiceError {
    fn from(error: Error) -> Self {
        Self::Sql(error)
    }
}

impl From<ValidationErrors> for ClientsServiceError {
    fn from(errors: ValidationErrors) -> Self {
        Self::ValidationFailed(messages(&errors))
    }
}
