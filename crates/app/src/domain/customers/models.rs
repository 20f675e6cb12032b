//! Customer Models

use jiff::Timestamp;
use serde::Serialize;

use crate::domain::{customers::records::CustomerId, status::RecordStatus};

/// Outward-facing customer: every persisted field except the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Customer {
    pub id: CustomerId,
    pub user_name: String,
    pub age: i32,
    pub mobile_number: String,
    pub email_address: String,
    pub address: Option<String>,
    pub status: RecordStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Loosely-typed projection of a single customer row.
pub type RawCustomer = serde_json::Map<String, serde_json::Value>;
