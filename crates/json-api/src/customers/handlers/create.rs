//! Create Customer Handler

use salvo::{oapi::extract::JsonBody, prelude::*};

use crate::{
    customers::{
        errors::into_status_error,
        models::{CustomerRequest, CustomerResponse},
    },
    envelope::ApiResponse,
    extensions::*,
};

/// Create Customer Handler
///
/// The new customer starts `ACTIVE` with a freshly generated credential.
#[endpoint(
    tags("customers"),
    summary = "Create Customer",
    responses(
        (status_code = StatusCode::CREATED, description = "Customer created"),
        (status_code = StatusCode::CONFLICT, description = "Identifying fields already in use"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CustomerRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ApiResponse<CustomerResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let customer = state
        .app
        .customers
        .create_customer(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.status_code(StatusCode::CREATED);

    Ok(Json(ApiResponse::created(
        "Customer created successfully",
        customer.into(),
    )))
}
