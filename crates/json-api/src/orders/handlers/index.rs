//! Order Index Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, get::OrderResponse},
    state::State,
};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrdersResponse {
    /// Orders, newest first
    pub orders: Vec<OrderResponse>,
}

/// Order Index Handler
///
/// Returns the customer's orders, newest first.
#[endpoint(
    tags("orders"),
    summary = "List Orders",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_uuid_or_403()?;

    let orders = state
        .app
        .orders
        .list_orders_for_customer(customer)
        .await
        .map_err(into_status_error)?;

    Ok(Json(OrdersResponse {
        orders: orders.into_iter().map(Into::into).collect(),
    }))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::orders::{MockOrdersService, OrderStatus, records::OrderUuid};

    use crate::test_helpers::{Mocks, TEST_CUSTOMER_UUID, make_order};

    use super::*;

    #[tokio::test]
    async fn test_index_lists_customer_orders() -> TestResult {
        let newer = OrderUuid::new();
        let older = OrderUuid::new();

        let mut orders = MockOrdersService::new();

        orders
            .expect_list_orders_for_customer()
            .once()
            .withf(|customer| *customer == TEST_CUSTOMER_UUID)
            .return_once(move |customer| {
                Ok(vec![
                    make_order(newer, customer, OrderStatus::Placed),
                    make_order(older, customer, OrderStatus::Cancelled),
                ])
            });

        orders.expect_list_orders().never();

        let service = Mocks {
            orders,
            ..Mocks::default()
        }
        .into_customer_service(Router::with_path("orders").get(handler));

        let body: OrdersResponse = TestClient::get("http://example.com/orders")
            .send(&service)
            .await
            .take_json()
            .await?;

        let statuses: Vec<_> = body.orders.iter().map(|o| o.status.as_str()).collect();

        assert_eq!(statuses, vec!["placed", "cancelled"]);
        assert_eq!(
            body.orders.first().map(|o| o.uuid),
            Some(newer.into_uuid())
        );

        Ok(())
    }
}
