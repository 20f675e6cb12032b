//! Create Client Handler

use salvo::{http::header::LOCATION, oapi::extract::JsonBody, prelude::*};

use crate::{
    clients::{
        errors::into_status_error,
        models::{ClientRequest, ClientResponse},
    },
    envelope::ApiResponse,
    extensions::*,
};

/// Create Client Handler
///
/// New clients start `ACTIVE` and unverified, with a pending one-time code.
#[endpoint(
    tags("clients"),
    summary = "Create Client",
    responses(
        (status_code = StatusCode::CREATED, description = "Client created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ClientRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ApiResponse<ClientResponse>>, StatusError> {
    let state = depot.state_or_500()?;

    let client = state
        .app
        .clients
        .create_client(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/client/{}", client.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(ApiResponse::created(
        "Client created successfully",
        client.into(),
    )))
}
