//! Client Data

use serde::Serialize;
use validator::Validate;

use crate::domain::validation::{validate_mobile_number, validate_not_blank};

/// Postal address of a client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Validate)]
pub struct ClientAddress {
    #[validate(custom(
        function = "validate_not_blank",
        message = "Please provide the customer address"
    ))]
    pub line: String,

    pub city: Option<String>,

    pub state: Option<String>,

    #[validate(custom(function = "validate_not_blank", message = "Please provide the country"))]
    pub country: String,
}

/// New Client Data
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewClient {
    #[validate(custom(function = "validate_not_blank", message = "Please provide username"))]
    pub name: String,

    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: Option<i32>,

    #[validate(custom(function = "validate_mobile_number"))]
    pub mobile_number: String,

    #[validate(email(message = "Please provide a valid email address"))]
    pub email_address: String,

    #[validate(nested)]
    pub address: Option<ClientAddress>,
}

/// Client Update Data
///
/// Replaces every profile field, the address block included.
pub type ClientUpdate = NewClient;
