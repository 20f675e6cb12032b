//! Customer Listing Handlers
//!
//! Query parameters: `pageNo` (default 0), `pageSize` (default 5) and
//! `sortBy` (default `id`). A page parameter that is present but not a
//! non-negative integer is a 400.

use salvo::prelude::*;

use patron_app::domain::customers::sorting::DEFAULT_SORT_KEY;

use crate::{
    customers::{
        errors::into_status_error,
        models::{CustomerPageResponse, CustomerResponse, into_responses},
    },
    envelope::ApiResponse,
    extensions::*,
};

fn sort_key(req: &Request) -> String {
    req.query::<String>("sortBy")
        .unwrap_or_else(|| DEFAULT_SORT_KEY.to_string())
}

/// One page of customers in id order
#[endpoint(tags("customers"), summary = "Page Customers")]
pub(crate) async fn paged(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<CustomerPageResponse>>, StatusError> {
    let state = depot.state_or_500()?;
    let request = req.page_request_or_400("pageNo", "pageSize")?;

    let customers = state
        .app
        .customers
        .list_page(request)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApiResponse::ok(
        "Customers fetched successfully with pagination",
        customers.into(),
    )))
}

/// One page of customers ordered by `sortBy`
#[endpoint(tags("customers"), summary = "Page And Sort Customers")]
pub(crate) async fn paged_sorted(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<CustomerPageResponse>>, StatusError> {
    let state = depot.state_or_500()?;
    let request = req.page_request_or_400("pageNo", "pageSize")?;

    let customers = state
        .app
        .customers
        .list_page_sorted(request, &sort_key(req))
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApiResponse::ok(
        "Customers fetched successfully with pagination and sorting",
        customers.into(),
    )))
}

/// Every customer ordered by `sortBy`, up to the configured cap
#[endpoint(tags("customers"), summary = "Sort Customers")]
pub(crate) async fn sorted(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<Vec<CustomerResponse>>>, StatusError> {
    let state = depot.state_or_500()?;

    let customers = state
        .app
        .customers
        .list_sorted(&sort_key(req))
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApiResponse::ok(
        "Customers fetched successfully with sorting",
        into_responses(customers),
    )))
}
