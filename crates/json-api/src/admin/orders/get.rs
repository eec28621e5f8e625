//! Admin Get Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    orders::{get::OrderResponse, into_status_error},
    state::State,
};

/// Admin Get Order Handler
///
/// Returns any order regardless of who placed it.
#[endpoint(
    tags("admin"),
    summary = "Get Any Order",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    depot.require_admin()?;

    let order = state
        .app
        .orders
        .get_order(order.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use storefront_app::domain::{
        customers::records::CustomerUuid,
        orders::{MockOrdersService, OrderStatus, OrdersServiceError, records::OrderUuid},
    };

    use crate::test_helpers::{Mocks, make_order};

    use super::*;

    fn make_service(orders: MockOrdersService) -> Service {
        Mocks {
            orders,
            ..Mocks::default()
        }
        .into_admin_service(Router::with_path("admin/orders/{order}").get(handler))
    }

    #[tokio::test]
    async fn test_admin_gets_any_order() -> TestResult {
        let uuid = OrderUuid::new();
        let owner = CustomerUuid::new();
        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .withf(move |o| *o == uuid)
            .return_once(move |_| Ok(make_order(uuid, owner, OrderStatus::Placed)));

        let body: OrderResponse = TestClient::get(format!("http://example.com/admin/orders/{uuid}"))
            .send(&make_service(orders))
            .await
            .take_json()
            .await?;

        assert_eq!(body.customer_uuid, owner.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_missing_order_returns_404() -> TestResult {
        let mut orders = MockOrdersService::new();

        orders
            .expect_get_order()
            .once()
            .return_once(|_| Err(OrdersServiceError::OrderNotFound));

        let res = TestClient::get(format!("http://example.com/admin/orders/{}", OrderUuid::new()))
            .send(&make_service(orders))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
