//! Get Order Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::PathParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::{
    customers::records::CustomerUuid,
    orders::{
        OrdersServiceError,
        records::{OrderLineRecord, OrderRecord, OrderUuid},
    },
};

use crate::{extensions::*, orders::errors::into_status_error, state::State};

/// Order Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderResponse {
    /// The unique identifier of the order
    pub uuid: Uuid,

    /// The customer who placed the order
    pub customer_uuid: Uuid,

    /// `placed`, `accepted` or `cancelled`
    pub status: String,

    /// Sum of all line quantities
    pub total_items: u64,

    /// Sum of all line totals in minor units
    pub total_price: u64,

    /// Incremented on every status change
    pub version: u64,

    /// Order lines in checkout order
    pub lines: Vec<OrderLineResponse>,

    /// The date and time the order was placed
    pub created_at: String,

    /// The date and time the status last changed
    pub updated_at: String,
}

/// Order Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct OrderLineResponse {
    /// Zero-based position within the order
    pub position: u32,

    /// The product ordered
    pub product_uuid: Uuid,

    /// Units ordered
    pub quantity: u32,

    /// Price per unit at checkout
    pub unit_price: u64,

    /// `quantity * unit_price`
    pub line_total: u64,
}

impl From<OrderLineRecord> for OrderLineResponse {
    fn from(line: OrderLineRecord) -> Self {
        Self {
            position: line.position,
            product_uuid: line.product_uuid.into(),
            quantity: line.quantity,
            unit_price: line.unit_price,
            line_total: line.line_total,
        }
    }
}

impl From<OrderRecord> for OrderResponse {
    fn from(order: OrderRecord) -> Self {
        Self {
            uuid: order.uuid.into(),
            customer_uuid: order.customer_uuid.into(),
            status: order.status.as_str().to_string(),
            total_items: order.total_items,
            total_price: order.total_price,
            version: order.version,
            lines: order.lines.into_iter().map(Into::into).collect(),
            created_at: order.created_at.to_string(),
            updated_at: order.updated_at.to_string(),
        }
    }
}

/// Fetch an order only if it belongs to `customer`.
pub(crate) async fn find_owned_order(
    state: &State,
    customer: CustomerUuid,
    order: OrderUuid,
) -> Result<OrderRecord, StatusError> {
    let order = state
        .app
        .orders
        .get_order(order)
        .await
        .map_err(into_status_error)?;

    if order.customer_uuid == customer {
        Ok(order)
    } else {
        Err(into_status_error(OrdersServiceError::OrderNotFound))
    }
}

/// Get Order Handler
///
/// Returns one of the customer's orders with its lines.
#[endpoint(
    tags("orders"),
    summary = "Get Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order found"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    order: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<Json<OrderResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_uuid_or_403()?;

    let order = find_owned_order(state, customer, order.into_inner().into()).await?;

    Ok(Json(order.into()))
}
