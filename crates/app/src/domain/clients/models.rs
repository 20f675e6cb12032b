//! Client Models

use jiff::Timestamp;
use serde::Serialize;

use crate::domain::{
    clients::{data::ClientAddress, records::ClientId},
    status::RecordStatus,
};

/// Outward-facing client. The credential and one-time code stay behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Client {
    pub id: ClientId,
    pub name: String,
    pub age: Option<i32>,
    pub mobile_number: String,
    pub email_address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<ClientAddress>,
    pub status: RecordStatus,
    pub verified: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
