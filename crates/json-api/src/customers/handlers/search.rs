//! Customer Search Handlers

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    customers::{
        errors::into_status_error,
        models::{CustomerPageResponse, CustomerResponse, into_responses},
    },
    envelope::ApiResponse,
    extensions::*,
};

/// Customers whose user name ends with the suffix
#[endpoint(tags("customers"), summary = "Search By User Name Suffix")]
pub(crate) async fn ends_with(
    suffix: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<Vec<CustomerResponse>>>, StatusError> {
    let state = depot.state_or_500()?;

    let customers = state
        .app
        .customers
        .find_by_user_name_ending_with(&suffix.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApiResponse::ok("OK", into_responses(customers))))
}

/// Customers whose user name starts with the prefix
#[endpoint(tags("customers"), summary = "Search By User Name Prefix")]
pub(crate) async fn starts_with(
    prefix: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<Vec<CustomerResponse>>>, StatusError> {
    let state = depot.state_or_500()?;

    let customers = state
        .app
        .customers
        .find_by_user_name_starting_with(&prefix.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApiResponse::ok("OK", into_responses(customers))))
}

/// Case-insensitive match on user name or email address
#[endpoint(tags("customers"), summary = "Search By Keyword")]
pub(crate) async fn keyword(
    term: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<Vec<CustomerResponse>>>, StatusError> {
    let state = depot.state_or_500()?;

    let customers = state
        .app
        .customers
        .search_by_keyword(&term.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApiResponse::ok("OK", into_responses(customers))))
}

/// Page of customers with an exact user name, read from `page` and `size`
#[endpoint(tags("customers"), summary = "Page By User Name")]
pub(crate) async fn paged_by_user_name(
    user_name: PathParam<String>,
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<CustomerPageResponse>>, StatusError> {
    let state = depot.state_or_500()?;
    let page = req.page_request_or_400("page", "size")?;

    let customers = state
        .app
        .customers
        .find_page_by_user_name(&user_name.into_inner(), page)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApiResponse::ok("OK", customers.into())))
}
