//! Test Helpers

use crate::domain::{
    clients::data::{ClientAddress, NewClient},
    customers::data::NewCustomer,
};

pub(crate) fn new_customer(user_name: &str, mobile_number: &str, email_address: &str) -> NewCustomer {
    NewCustomer {
        user_name: user_name.to_string(),
        age: 37,
        mobile_number: mobile_number.to_string(),
        email_address: email_address.to_string(),
        address: Some("Zion".to_string()),
    }
}

pub(crate) fn new_client(name: &str) -> NewClient {
    NewClient {
        name: name.to_string(),
        age: Some(30),
        mobile_number: "9000000001".to_string(),
        email_address: format!("{name}@example.com"),
        address: Some(ClientAddress {
            line: "1 Main Road".to_string(),
            city: Some("Chennai".to_string()),
            state: None,
            country: "IN".to_string(),
        }),
    }
}
