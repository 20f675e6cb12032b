//! Change Mobile Number Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    customers::{errors::into_status_error, models::CustomerResponse},
    envelope::ApiResponse,
    extensions::*,
};

/// Change Mobile Number Handler
///
/// Moves the customer found by user name onto a new mobile number. The old
/// number is released; a number held by any other customer is a conflict.
#[endpoint(
    tags("customers"),
    summary = "Change Mobile Number",
    responses(
        (status_code = StatusCode::CREATED, description = "Mobile number changed"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
        (status_code = StatusCode::CONFLICT, description = "Mobile number already in use"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    user_name: PathParam<String>,
    mobile: PathParam<String>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ApiResponse<CustomerResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let customer = state
        .app
        .customers
        .change_mobile_number(&user_name.into_inner(), &mobile.into_inner())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(ApiResponse::created("OK", customer.into())))
}
