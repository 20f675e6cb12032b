//! Update Client Handler

use salvo::{
    oapi::extract::{JsonBody, PathParam},
    prelude::*,
};

use crate::{
    clients::{
        errors::into_status_error,
        models::{ClientRequest, ClientResponse},
    },
    envelope::ApiResponse,
    extensions::*,
};

/// Update Client Handler
///
/// Replaces the whole profile, address block included.
#[endpoint(
    tags("clients"),
    summary = "Update Client",
    responses(
        (status_code = StatusCode::OK, description = "Client updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Client not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<i64>,
    json: JsonBody<ClientRequest>,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<ClientResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let client = state
        .app
        .clients
        .update_client(id.into_inner().into(), json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApiResponse::ok(
        "Client updated successfully",
        client.into(),
    )))
}
