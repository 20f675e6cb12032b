//! Customer Records

use jiff::Timestamp;

use crate::{credentials::Credential, domain::status::RecordStatus, ids::TypedId};

/// Customer Id
pub type CustomerId = TypedId<CustomerRecord>;

/// Customer Record, as persisted.
#[derive(Debug, Clone)]
pub struct CustomerRecord {
    pub id: CustomerId,
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
