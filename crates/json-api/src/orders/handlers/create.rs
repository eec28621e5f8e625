//! Create Order Handler

use std::sync::Arc;

use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::orders::{data::NewOrder, records::OrderUuid};

use crate::{
    extensions::*,
    orders::{errors::into_status_error, get::OrderResponse},
    state::State,
};

/// Create Order Request
///
/// Supplying `uuid` makes a retried checkout detectable: a second attempt with
/// the same value fails with a conflict instead of placing a second order.
#[derive(Debug, Default, Serialize, Deserialize, ToSchema)]
pub(crate) struct CreateOrderRequest {
    #[serde(default)]
    pub uuid: Option<Uuid>,
}

impl From<CreateOrderRequest> for NewOrder {
    fn from(request: CreateOrderRequest) -> Self {
        NewOrder {
            uuid: request.uuid.map_or_else(OrderUuid::new, OrderUuid::from_uuid),
        }
    }
}

/// Create Order Handler
///
/// Checks out the customer's cart at current catalog prices and empties it.
#[endpoint(
    tags("orders"),
    summary = "Place Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::CREATED, description = "Order placed"),
        (status_code = StatusCode::CONFLICT, description = "Cart empty, product unavailable or order exists"),
        (status_code = StatusCode::UNPROCESSABLE_ENTITY, description = "Profile incomplete"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<CreateOrderRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_uuid_or_403()?;

    let order = state
        .app
        .orders
        .create_order(customer, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/orders/{}", order.uuid), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(order.into()))
}
