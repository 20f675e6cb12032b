//! Client Index Handler

use salvo::prelude::*;

use crate::{
    clients::{errors::into_status_error, models::ClientResponse},
    envelope::ApiResponse,
    extensions::*,
};

/// Client Index Handler
#[endpoint(tags("clients"), summary = "List Clients")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<ApiResponse<Vec<ClientResponse>>>, StatusError> {
    let state = depot.state_or_500()?;

    let clients = state
        .app
        .clients
        .list_clients()
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApiResponse::ok(
        "OK",
        clients.into_iter().map(Into::into).collect(),
    )))
}
