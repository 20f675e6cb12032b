//! Customer Mapper
//!
//! Pure conversions between request data, the row to insert, and the
//! outward-facing model.

use jiff::Timestamp;

use crate::{
    credentials::{Credential, CredentialHasher, issue_credential},
    domain::{
        customers::{data::NewCustomer, models::Customer, records::CustomerRecord},
        status::RecordStatus,
    },
};

/// A customer ready to insert: validated profile, forced status, fresh
/// credential, and both timestamps set to the same instant.
#[derive(Debug, Clone)]
pub struct CustomerDraft {
    pub user_name: String,
    pub age: i32,
    pub mobile_number: String,
    pub email_address: String,
    pub address: Option<String>,
    pub credential: Credential,
    pub status: RecordStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CustomerDraft {
    #[must_use]
    pub fn from_new(customer: NewCustomer, hasher: &dyn CredentialHasher, now: Timestamp) -> Self {
        Self {
            user_name: customer.user_name,
            age: customer.age,
            mobile_number: customer.mobile_number,
            email_address: customer.email_address,
            address: customer.address,
            credential: issue_credential(hasher),
            status: RecordStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }
}

impl From<CustomerRecord> for Customer {
    fn from(record: CustomerRecord) -> Self {
        Self {
            id: record.id,
            user_name: record.user_name,
            age: record.age,
            mobile_number: record.mobile_number,
            email_address: record.email_address,
            address: record.address,
            status: record.status,
            created_at: record.created_at,
            updated_at: record.updated_at,
        }
    }
}
