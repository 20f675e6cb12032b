//! Update Address Handler

use salvo::{
    oapi::extract::{PathParam, QueryParam},
    prelude::*,
};

use crate::{customers::errors::into_status_error, envelope::ApiResponse, extensions::*};

/// Update Address Handler
///
/// Rewrites the address of every customer with the user name and reports the
/// number of rows touched. Zero is a success.
#[endpoint(tags("customers"), summary = "Update Address By User Name")]
pub(crate) async fn handler(
    user_name: PathParam<String>,
    address: QueryParam<String, true>,
    depot: &mut Depot,
) -> Result<Json<ApiResponse<u64>>, StatusError> {
    let state = depot.state_or_500()?;

    let updated = state
        .app
        .customers
        .update_address_by_user_name(&user_name.into_inner(), &address.into_inner())
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApiResponse::ok(format!("Updated rows: {updated}"), updated)))
}
