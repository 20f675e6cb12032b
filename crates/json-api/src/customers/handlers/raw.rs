//! Raw Customer Handler

use salvo::prelude::*;

use patron_app::domain::customers::models::RawCustomer;

use crate::{customers::errors::into_status_error, envelope::ApiResponse, extensions::*};

/// Loosely-typed field map of the customer holding an email address.
///
/// Plain handler: the payload is an open map with no fixed schema.
#[handler]
pub(crate) async fn handler(
    req: &mut Request,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<RawCustomer>>, StatusError> {
    let state = depot.state_or_500()?;

    let email = req
        .param::<String>("email")
        .ok_or_else(|| StatusError::bad_request().brief("missing email address"))?;

    let customer = state
        .app
        .customers
        .find_raw_by_email_address(&email)
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApiResponse::ok("OK", customer)))
}
