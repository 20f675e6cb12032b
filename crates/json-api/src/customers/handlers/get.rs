//! Get Customer Handlers
//!
//! One lookup per identifying field. Each answers 404 when no customer holds
//! the value, whatever its status.

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    customers::{errors::into_status_error, models::CustomerResponse},
    envelope::ApiResponse,
    extensions::*,
};

/// Get Customer By Mobile Number
#[endpoint(tags("customers"), summary = "Get Customer By Mobile Number")]
pub(crate) async fn by_mobile(
    mobile: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<CustomerResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let customer = state
        .app
        .customers
        .get_by_mobile_number(&mobile.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApiResponse::ok("OK", customer.into())))
}

/// Get Customer By User Name
#[endpoint(tags("customers"), summary = "Get Customer By User Name")]
pub(crate) async fn by_user_name(
    user_name: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<CustomerResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let customer = state
        .app
        .customers
        .get_by_user_name(&user_name.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApiResponse::ok("OK", customer.into())))
}

/// Get Customer By Email Address
#[endpoint(tags("customers"), summary = "Get Customer By Email Address")]
pub(crate) async fn by_email(
    email: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<CustomerResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let customer = state
        .app
        .customers
        .get_by_email_address(&email.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApiResponse::ok("OK", customer.into())))
}
