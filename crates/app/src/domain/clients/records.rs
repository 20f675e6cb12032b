//! Client Records

use jiff::Timestamp;

use crate::{
    credentials::Credential,
    domain::{clients::data::ClientAddress, status::RecordStatus},
    ids::TypedId,
};

/// Client Id
pub type ClientId = TypedId<ClientRecord>;

/// Client Record, as persisted.
#[derive(Debug, Clone)]
pub struct ClientRecord {
    pub id: ClientId,
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
