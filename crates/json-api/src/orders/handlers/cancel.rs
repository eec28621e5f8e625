//! Cancel Order Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{
    extensions::*,
    orders::{
        errors::into_status_error,
        get::{OrderResponse, find_owned_order},
    },
    state::State,
};

/// Cancel Order Handler
///
/// Cancels one of the customer's own orders while it is still placed.
#[endpoint(
    tags("orders"),
    summary = "Cancel Order",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Order cancelled"),
        (status_code = StatusCode::NOT_FOUND, description = "Order not found"),
        (status_code = StatusCode::CONFLICT, description = "Order is no longer placed"),
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

    let order = state
        .app
        .orders
        .cancel_order(order.uuid)
        .await
        .map_err(into_status_error)?;

    Ok(Json(order.into()))
}
