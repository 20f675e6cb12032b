//! Get Client Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    clients::{errors::into_status_error, models::ClientResponse},
    envelope::ApiResponse,
    extensions::*,
};

/// Get Client Handler
#[endpoint(
    tags("clients"),
    summary = "Get Client",
    responses(
        (status_code = StatusCode::OK, description = "Client found"),
        (status_code = StatusCode::NOT_FOUND, description = "Client not found"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<ClientResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let client = state
        .app
        .clients
        .get_client(id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApiResponse::ok("OK", client.into())))
}
