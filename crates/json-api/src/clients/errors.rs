//! Client Errors

use salvo::http::StatusError;
use tracing::error;

use patron_app::domain::clients::ClientsServiceError;

pub(crate) fn into_status_error(error: ClientsServiceError) -> StatusError {
    match error {
        ClientsServiceError::NotFound(_) => StatusError::not_found().brief(error.to_string()),
        ClientsServiceError::ValidationFailed(messages) => StatusError::bad_request()
            .brief("Validation failed")
            .detail(messages.join("; ")),
        ClientsServiceError::Sql(source) => {
            error!("client storage failure: {source}");

            StatusError::internal_server_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use salvo::http::StatusCode;

    use patron_app::domain::clients::records::ClientId;

    use super::*;

    #[test]
    fn missing_client_is_404_naming_the_id() {
        let error = into_status_error(ClientsServiceError::NotFound(ClientId::from_i64(7)));

        assert_eq!(error.code, StatusCode::NOT_FOUND);
        assert_eq!(error.brief, "client 7 does not exist");
    }

    #[test]
    fn nested_address_messages_reach_the_detail() {
        let error = into_status_error(ClientsServiceError::ValidationFailed(vec![
            "Please provide the country".to_string(),
        ]));

        assert_eq!(error.code, StatusCode::BAD_REQUEST);
        assert_eq!(error.detail.as_deref(), Some("Please provide the country"));
    }
}
