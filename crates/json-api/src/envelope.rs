//! Success envelope shared by every resource.

use salvo::{http::StatusCode, oapi::ToSchema};
use serde::{Deserialize, Serialize};

/// Standard success body: status code, message, payload.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ApiResponse<T> {
    /// HTTP status code, repeated in the body
    pub status: u16,

    /// Human readable outcome
    pub message: String,

    /// Payload, absent when there is nothing to return
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub(crate) fn new(status: StatusCode, message: impl Into<String>, data: T) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
            data: Some(data),
        }
    }

    pub(crate) fn ok(message: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::OK, message, data)
    }

    pub(crate) fn created(message: impl Into<String>, data: T) -> Self {
        Self::new(StatusCode::CREATED, message, data)
    }
}
