//! Client wire models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use patron_app::domain::clients::{
    data::{ClientAddress, NewClient},
    models::Client,
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub(crate) struct ClientAddressBody {
    pub address: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: String,
}

impl From<ClientAddressBody> for ClientAddress {
    fn from(body: ClientAddressBody) -> Self {
        ClientAddress {
            line: body.address,
            city: body.city,
            state: body.state,
            country: body.country,
        }
    }
}

impl From<ClientAddress> for ClientAddressBody {
    fn from(address: ClientAddress) -> Self {
        ClientAddressBody {
            address: address.line,
            city: address.city,
            state: address.state,
            country: address.country,
        }
    }
}

/// Client profile as supplied by callers, for both create and update.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClientRequest {
    pub client_name: String,
    pub client_age: Option<i32>,
    pub client_mobile_number: String,
    pub client_email_address: String,
    pub client_address: Option<ClientAddressBody>,
}

impl From<ClientRequest> for NewClient {
    fn from(request: ClientRequest) -> Self {
        NewClient {
            name: request.client_name,
            age: request.client_age,
            mobile_number: request.client_mobile_number,
            email_address: request.client_email_address,
            address: request.client_address.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ClientResponse {
    pub id: i64,

    pub client_name: String,

    pub client_age: Option<i32>,

    pub client_mobile_number: String,

    pub client_email_address: String,

    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub client_address: Option<ClientAddressBody>,

    /// `ACTIVE` or `INACTIVE`
    pub status: String,

    /// Whether the one-time code has been confirmed
    pub verified: bool,

    pub created_at: String,

    pub updated_at: String,
}

impl From<Client> for ClientResponse {
    fn from(client: Client) -> Self {
        ClientResponse {
            id: client.id.into_i64(),
            client_name: client.name,
            client_age: client.age,
            client_mobile_number: client.mobile_number,
            client_email_address: client.email_address,
            client_address: client.address.map(Into::into),
            status: client.status.to_string(),
            verified: client.verified,
            created_at: client.created_at.to_string(),
            updated_at: client.updated_at.to_string(),
        }
    }
}
