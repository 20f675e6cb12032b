//! Customer Data

use validator::Validate;

use crate::domain::validation::{validate_mobile_number, validate_not_blank};

/// New Customer Data
///
/// There is no status or credential here: both are assigned on creation.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct NewCustomer {
    #[validate(custom(function = "validate_not_blank", message = "Please provide username"))]
    pub user_name: String,

    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: i32,

    #[validate(custom(function = "validate_mobile_number"))]
    pub mobile_number: String,

    #[validate(email(message = "Please provide a valid email address"))]
    pub email_address: String,

    pub address: Option<String>,
}

/// Customer Update Data
///
/// The record is located by `mobile_number`, which is not itself rewritten.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct CustomerUpdate {
    pub mobile_number: String,

    #[validate(custom(function = "validate_not_blank", message = "Please provide username"))]
    pub user_name: String,

    #[validate(range(min = 1, max = 120, message = "Age must be between 1 and 120"))]
    pub age: i32,

    #[validate(email(message = "Please provide a valid email address"))]
    pub email_address: String,

    pub address: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn customer(user_name: &str) -> NewCustomer {
        NewCustomer {
            user_name: user_name.to_string(),
            age: 30,
            mobile_number: "9000000001".to_string(),
            email_address: "neo@x.com".to_string(),
            address: None,
        }
    }

    #[test]
    fn whitespace_user_name_is_invalid() {
        let errors = customer("   ").validate().unwrap_err();

        assert!(errors.field_errors().contains_key("user_name"));
    }

    #[test]
    fn update_rejects_whitespace_user_name() {
        let update = CustomerUpdate {
            mobile_number: "9000000001".to_string(),
            user_name: " \t".to_string(),
            age: 30,
            email_address: "neo@x.com".to_string(),
            address: None,
        };

        assert!(update.validate().is_err());
        assert!(customer("neo").validate().is_ok());
    }
}
