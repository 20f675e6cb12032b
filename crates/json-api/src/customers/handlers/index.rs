//! Customer Index Handler

use salvo::prelude::*;

use crate::{
    customers::{
        errors::into_status_error,
        models::{CustomerResponse, into_responses},
    },
    envelope::ApiResponse,
    extensions::*,
};

/// Customer Index Handler
///
/// Returns every customer, inactive ones included.
#[endpoint(tags("customers"), summary = "List Customers")]
pub(crate) async fn handler(
    depot: &mut Depot,
) -> Result<Json<ApiResponse<Vec<CustomerResponse>>>, StatusError> {
    let state = depot.state_or_500()?;

    let customers = state
        .app
        .customers
        .list_customers()
        .await
        .map_err(into_status_error)?;

    Ok(Json(ApiResponse::ok("OK", into_responses(customers))))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use patron_app::domain::customers::MockCustomersService;

    use crate::test_helpers::{customers_service, make_customer};

    use super::*;

    fn make_service(customers: MockCustomersService) -> Service {
        customers_service(customers, Router::with_path("customer/all").get(handler))
    }

    #[tokio::test]
    async fn test_index_returns_empty_list() -> TestResult {
        let mut customers = MockCustomersService::new();

        customers
            .expect_list_customers()
            .once()
            .return_once(|| Ok(vec![]));

        let mut res = TestClient::get("http://example.com/customer/all")
            .send(&make_service(customers))
            .await;

        let body: ApiResponse<Vec<CustomerResponse>> = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body.data, Some(vec![]));

        Ok(())
    }

    #[tokio::test]
    async fn test_index_returns_customers_in_service_order() -> TestResult {
        let mut customers = MockCustomersService::new();

        customers.expect_list_customers().once().return_once(|| {
            Ok(vec![
                make_customer("neo", "9000000001"),
                make_customer("trinity", "9000000002"),
            ])
        });

        let body: ApiResponse<Vec<CustomerResponse>> =
            TestClient::get("http://example.com/customer/all")
                .send(&make_service(customers))
                .await
                .take_json()
                .await?;

        let names: Vec<String> = body
            .data
            .unwrap_or_default()
            .into_iter()
            .map(|customer| customer.user_name)
            .collect();

        assert_eq!(names, ["neo", "trinity"]);

        Ok(())
    }
}
