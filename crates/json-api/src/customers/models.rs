//! Customer wire models.

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use patron_app::domain::{
    customers::{
        data::{CustomerUpdate, NewCustomer},
        models::Customer,
    },
    pagination::Page,
};

/// Customer profile as supplied by callers.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CustomerRequest {
    pub user_name: String,
    pub age: i32,
    pub mobile_number: String,
    pub email_address: String,
    pub address: Option<String>,
}

impl From<CustomerRequest> for NewCustomer {
    fn from(request: CustomerRequest) -> Self {
        NewCustomer {
            user_name: request.user_name,
            age: request.age,
            mobile_number: request.mobile_number,
            email_address: request.email_address,
            address: request.address,
        }
    }
}

impl From<CustomerRequest> for CustomerUpdate {
    fn from(request: CustomerRequest) -> Self {
        CustomerUpdate {
            mobile_number: request.mobile_number,
            user_name: request.user_name,
            age: request.age,
            email_address: request.email_address,
            address: request.address,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CustomerResponse {
    /// Store-assigned id
    pub id: i64,

    pub user_name: String,

    pub age: i32,

    pub mobile_number: String,

    pub email_address: String,

    pub address: Option<String>,

    /// `ACTIVE` or `INACTIVE`
    pub status: String,

    /// The date and time the customer was created
    pub created_at: String,

    /// The date and time the customer was last changed
    pub updated_at: String,
}

impl From<Customer> for CustomerResponse {
    fn from(customer: Customer) -> Self {
        CustomerResponse {
            id: customer.id.into_i64(),
            user_name: customer.user_name,
            age: customer.age,
            mobile_number: customer.mobile_number,
            email_address: customer.email_address,
            address: customer.address,
            status: customer.status.to_string(),
            created_at: customer.created_at.to_string(),
            updated_at: customer.updated_at.to_string(),
        }
    }
}

/// One page of customers.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CustomerPageResponse {
    pub items: Vec<CustomerResponse>,
    pub page: u32,
    pub size: u32,
    pub total_elements: u64,
    pub total_pages: u64,
}

impl From<Page<Customer>> for CustomerPageResponse {
    fn from(page: Page<Customer>) -> Self {
        CustomerPageResponse {
            items: page.items.into_iter().map(Into::into).collect(),
            page: page.page,
            size: page.size,
            total_elements: page.total_elements,
            total_pages: page.total_pages,
        }
    }
}

pub(crate) fn into_responses(customers: Vec<Customer>) -> Vec<CustomerResponse> {
    customers.into_iter().map(Into::into).collect()
}
