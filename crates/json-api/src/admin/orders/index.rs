//! Admin Order Index Handler

use std::sync::Arc;

use salvo::prelude::*;

use crate::{
    extensions::*,
    orders::{index::OrdersResponse, into_status_error},
    state::State,
};

/// Admin Order Index Handler
///
/// Returns every customer's orders, newest first.
#[endpoint(
    tags("admin"),
    summary = "List All Orders",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<OrdersResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.require_admin()?;

    let orders = state
        .app
        .orders
        .list_orders()
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

    use storefront_app::domain::{
        customers::records::CustomerUuid,
        orders::{MockOrdersService, OrderStatus, OrdersServiceError, records::OrderUuid},
    };

    use crate::test_helpers::{Mocks, make_order, storage_error};

    use super::*;

    fn route() -> Router {
        Router::with_path("admin/orders").get(handler)
    }

    #[tokio::test]
    async fn test_admin_lists_all_orders() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_list_orders().once().return_once(|| {
            Ok(vec![
                make_order(OrderUuid::new(), CustomerUuid::new(), OrderStatus::Placed),
                make_order(OrderUuid::new(), CustomerUuid::new(), OrderStatus::Accepted),
            ])
        });

        let service = Mocks {
            orders,
            ..Mocks::default()
        }
        .into_admin_service(route());

        let body: OrdersResponse = TestClient::get("http://example.com/admin/orders")
            .send(&service)
            .await
            .take_json()
            .await?;

        assert_eq!(body.orders.len(), 2, "both customers' orders are listed");

        Ok(())
    }

    #[tokio::test]
    async fn test_customer_cannot_list_all_orders() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders.expect_list_orders().never();

        let service = Mocks {
            orders,
            ..Mocks::default()
        }
        .into_customer_service(route());

        let res = TestClient::get("http://example.com/admin/orders")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::FORBIDDEN));

        Ok(())
    }

    #[tokio::test]
    async fn test_storage_error_returns_500() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_list_orders()
            .once()
            .return_once(|| Err(OrdersServiceError::Sql(storage_error())));

        let service = Mocks {
            orders,
            ..Mocks::default()
        }
        .into_admin_service(route());

        let res = TestClient::get("http://example.com/admin/orders")
            .send(&service)
            .await;

        assert_eq!(res.status_code, Some(StatusCode::INTERNAL_SERVER_ERROR));

        Ok(())
    }
}
