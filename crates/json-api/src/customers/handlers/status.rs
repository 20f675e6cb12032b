//! Change Status Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use patron_app::domain::status::RecordStatus;

use crate::{
    customers::{errors::into_status_error, models::CustomerResponse},
    envelope::ApiResponse,
    extensions::*,
};

/// Change Status Handler
///
/// Accepts `ACTIVE` or `INACTIVE`, in any case.
#[endpoint(
    tags("customers"),
    summary = "Change Customer Status",
    responses(
        (status_code = StatusCode::OK, description = "Status changed"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Unknown status"),
    ),
)]
pub(crate) async fn handler(
    mobile: PathParam<String>,
    status: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<CustomerResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let status = status
        .into_inner()
        .parse::<RecordStatus>()
        .or_400("could not parse status")?;

    let customer = state
        .app
        .customers
        .change_status(&mobile.into_inner(), status)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApiResponse::ok(
        "Customer status updated successfully",
        customer.into(),
    )))
}
