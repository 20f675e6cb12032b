//! Delete Customer Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    customers::{errors::into_status_error, models::CustomerResponse},
    envelope::ApiResponse,
    extensions::*,
};

/// Delete Customer Handler
///
/// Soft delete: the customer is marked `INACTIVE` and stays in the store.
#[endpoint(
    tags("customers"),
    summary = "Delete Customer",
    responses(
        (status_code = StatusCode::OK, description = "Customer marked inactive"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
    ),
)]
pub(crate) async fn handler(
    mobile: PathParam<String>,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<CustomerResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let customer = state
        .app
        .customers
        .soft_delete(&mobile.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApiResponse::ok(
        "Customer deleted successfully",
        customer.into(),
    )))
}
