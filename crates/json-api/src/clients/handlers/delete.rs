//! Delete Client Handler

use salvo::{oapi::extract::PathParam, prelude::*};

use crate::{
    clients::{errors::into_status_error, models::ClientResponse},
    envelope::ApiResponse,
    extensions::*,
};

/// Delete Client Handler
///
/// Soft delete: the client is marked `INACTIVE`.
#[endpoint(tags("clients"), summary = "Delete Client")]
pub(crate) async fn handler(
    id: PathParam<i64>,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<ClientResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let client = state
        .app
        .clients
        .soft_delete_client(id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApiResponse::ok(
        "Client deleted successfully",
        client.into(),
    )))
}
