//! Update Customer Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    customers::{
        errors::into_status_error,
        models::{CustomerRequest, CustomerResponse},
    },
    envelope::ApiResponse,
    extensions::*,
};

/// Update Customer Handler
///
/// The customer is located by the mobile number in the body; every other
/// profile field is overwritten.
#[endpoint(
    tags("customers"),
    summary = "Update Customer",
    responses(
        (status_code = StatusCode::OK, description = "Customer updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
        (status_code = StatusCode::CONFLICT, description = "User name or email address already in use"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CustomerRequest>,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<CustomerResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let customer = state
        .app
        .customers
        .update_customer(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApiResponse::ok(
        "Customer updated successfully",
        customer.into(),
    )))
}
