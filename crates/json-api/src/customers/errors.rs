//! Customer Errors

use salvo::http::StatusError;
use tracing::error;

use patron_app::domain::customers::CustomersServiceError;

pub(crate) fn into_status_error(error: CustomersServiceError) -> StatusError {
    match error {
        CustomersServiceError::NotFound(_) => StatusError::not_found().brief(error.to_string()),
        CustomersServiceError::AlreadyExists(_) => StatusError::conflict().brief(error.to_string()),
        CustomersServiceError::ValidationFailed(messages) => StatusError::bad_request()
            .brief("Validation failed")
            .detail(messages.join("; ")),
        CustomersServiceError::InvalidSortKey(_) => {
            StatusError::bad_request().brief(error.to_string())
        }
        CustomersServiceError::Sql(source) => {
            error!("customer storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}
