//! Purge Inactive Customers Handler

use salvo::prelude::*;

use crate::{customers::errors::into_status_error, envelope::ApiResponse, extensions::*};

/// Purge Inactive Customers Handler
///
/// Hard deletes every `INACTIVE` customer.
#[endpoint(tags("customers"), summary = "Purge Inactive Customers")]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ApiResponse<u64>>, StatusError> {
    let state = depot.state_or_500()?;

    let deleted = state
        .app
        .customers
        .purge_inactive()
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApiResponse::ok(format!("Deleted rows: {deleted}"), deleted)))
}
