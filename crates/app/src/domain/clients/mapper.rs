//! Client Mapper

use jiff::Timestamp;

use crate::{
    credentials::{Credential, CredentialHasher, generate_otp, issue_credential},
    domain::{
        clients::{
            data::{ClientAddress, NewClient},
            models::Client,
            records::ClientRecord,
        },
        status::RecordStatus,
    },
};

/// A client ready to insert: active, unverified, with a hashed credential and
/// a fresh one-time code.
#[derive(Debug, Clone)]
pub struct ClientDraft {
    pub name: String,
    pub age: Option<i32>,
    pub mobile_number: String,
    pub email_address: String,
    pub address: Option<ClientAddress>,
    pub credential: Credential,
    pub otp: String,
    pub verified: bool,
    pub status: RecordStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ClientDraft {
    #[must_use]
    pub fn from_new(client: NewClient, hasher: &dyn CredentialHasher, now: Timestamp) -> Self {
        Self {
            name: client.name,
            age: client.age,
            mobile_number: client.mobile_number,
            email_address: client.email_address,
            address: client.address,
            credential: issue_credential(hasher),
            otp: generate_otp(),
            verified: false,
            status: RecordStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<ClientRecord> for Client {
    fn from(record: ClientRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            age: record.age,
            mobile_number: record.mobile_number,
            email_address: record.email_address,
            address: record.address,
            status: record.status,
            verified: record.verified,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
