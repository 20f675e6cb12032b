//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use patron_app::{
    context::AppContext,
    domain::{
        clients::{MockClientsService, data::ClientAddress, models::Client, records::ClientId},
        customers::{MockCustomersService, models::Customer, records::CustomerId},
        status::RecordStatus,
    },
};

use crate::state::State;

fn strict_customers_mock() -> MockCustomersService {
    let mut customers = MockCustomersService::new();

    customers.expect_create_customer().never();
    customers.expect_list_customers().never();
    customers.expect_get_by_id().never();
    customers.expect_get_by_mobile_number().never();
    customers.expect_get_by_user_name().never();
    customers.expect_get_by_email_address().never();
    customers.expect_update_customer().never();
    customers.expect_soft_delete().never();
    customers.expect_change_mobile_number().never();
    customers.expect_change_status().never();
    customers.expect_find_by_user_name_ending_with().never();
    customers.expect_find_by_user_name_starting_with().never();
    customers.expect_search_by_keyword().never();
    customers.expect_find_page_by_user_name().never();
    customers.expect_find_raw_by_email_address().never();
    customers.expect_update_address_by_user_name().never();
    customers.expect_purge_inactive().never();
    customers.expect_list_page().never();
    customers.expect_list_page_sorted().never();
    customers.expect_list_sorted().never();

    customers
}

fn strict_clients_mock() -> MockClientsService {
    let mut clients = MockClientsService::new();

    clients.expect_create_client().never();
    clients.expect_list_clients().never();
    clients.expect_get_client().never();
    clients.expect_update_client().never();
    clients.expect_soft_delete_client().never();

    clients
}

fn service_with(app: AppContext, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(State::from_app_context(app)))
            .push(route),
    )
}

pub(crate) fn customers_service(customers: MockCustomersService, route: Router) -> Service {
    service_with(
        AppContext {
            customers: Arc::new(customers),
            clients: Arc::new(strict_clients_mock()),
        },
        route,
    )
}

pub(crate) fn clients_service(clients: MockClientsService, route: Router) -> Service {
    service_with(
        AppContext {
            customers: Arc::new(strict_customers_mock()),
            clients: Arc::new(clients),
        },
        route,
    )
}

pub(crate) fn make_customer(user_name: &str, mobile_number: &str) -> Customer {
    Customer {
        id: CustomerId::from_i64(1),
        user_name: user_name.to_string(),
        age: 37,
        mobile_number: mobile_number.to_string(),
        email_address: format!("{user_name}@example.com"),
        address: Some("Zion".to_string()),
        status: RecordStatus::Active,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}

pub(crate) fn make_client(id: i64) -> Client {
    Client {
        id: ClientId::from_i64(id),
        name: "acme".to_string(),
        age: Some(30),
        mobile_number: "9000000001".to_string(),
        email_address: "acme@example.com".to_string(),
        address: Some(ClientAddress {
            line: "1 Main Road".to_string(),
            city: Some("Chennai".to_string()),
            state: None,
            country: "IN".to_string(),
        }),
        status: RecordStatus::Active,
        verified: false,
        created_at: Timestamp::UNIX_EPOCH,
        updated_at: Timestamp::UNIX_EPOCH,
    }
}
