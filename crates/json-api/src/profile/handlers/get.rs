//! Get Profile Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::customers::records::CustomerRecord;

use crate::{extensions::*, profile::errors::into_status_error, state::State};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct ProfileResponse {
    /// The unique identifier of the customer
    pub uuid: Uuid,

    /// Display name
    pub name: String,

    /// Delivery street address
    pub address: Option<String>,

    /// Delivery city
    pub city: Option<String>,

    /// Contact phone number
    pub phone: Option<String>,

    /// Whether the profile is complete enough to place an order
    pub checkout_ready: bool,

    /// Profile fields that still need a value before checkout
    pub missing_fields: Vec<String>,
}

impl From<CustomerRecord> for ProfileResponse {
    fn from(customer: CustomerRecord) -> Self {
        let missing_fields: Vec<String> = customer
            .missing_checkout_fields()
            .into_iter()
            .map(str::to_string)
            .collect();

        Self {
            uuid: customer.uuid.into(),
            checkout_ready: missing_fields.is_empty(),
            missing_fields,
            name: customer.name,
            address: customer.address,
            city: customer.city,
            phone: customer.phone,
        }
    }
}

/// Get Profile Handler
///
/// Returns the authenticated customer's profile and checkout readiness.
#[endpoint(
    tags("profile"),
    summary = "Get Profile",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<ProfileResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_uuid_or_403()?;

    let customer = state
        .app
        .customers
        .get_customer(customer)
        .await
        .map_err(into_status_error)?;

    Ok(Json(customer.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::customers::MockCustomersService;

    use crate::test_helpers::{Mocks, TEST_CUSTOMER_UUID, make_customer};

    use super::*;

    fn route() -> Router {
        Router::with_path("profile").get(handler)
    }

    #[tokio::test]
    async fn test_get_profile_reports_missing_fields() -> TestResult {
        let mut customers = MockCustomersService::new();

        customers
            .expect_get_customer()
            .once()
            .withf(|customer| *customer == TEST_CUSTOMER_UUID)
            .return_once(|customer| Ok(make_customer(customer)));

        let service = Mocks {
            customers,
            ..Mocks::default()
        }
        .into_customer_service(route());

        let body: ProfileResponse = TestClient::get("http://example.com/profile")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert_eq!(body.uuid, TEST_CUSTOMER_UUID.into_uuid());
        assert!(!body.checkout_ready, "fixture customer has no phone");
        assert_eq!(body.missing_fields, vec!["phone".to_string()]);

        Ok(())
    }

    #[tokio::test]
    async fn test_get_profile_as_admin_returns_403() -> TestResult {
        let mut customers = MockCustomersService::new();

        customers.expect_get_customer().never();

        let service = Mocks {
            customers,
            ..Mocks::default()
        }
        .into_admin_service(route());

        let res = TestClient::get("http://example.com/profile")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }
}
