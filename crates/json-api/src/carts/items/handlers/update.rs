//! Update Cart Item Handler

use std::sync::Arc;

use salvo::{
    oapi::{
        ToSchema,
        extract::{JsonBody, PathParam},
    },
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::carts::data::CartLineUpdate;

use crate::{
    carts::{errors::into_status_error, get::CartResponse},
    extensions::*,
    state::State,
};

/// Update Cart Item Request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateCartItemRequest {
    /// New quantity; zero or less removes the line
    pub quantity: i32,
}

/// Update Cart Item Handler
#[endpoint(
    tags("cart"),
    summary = "Set Cart Item Quantity",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Quantity updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Product is not in the cart"),
        (status_code = StatusCode::CONFLICT, description = "Cart busy"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    product: PathParam<Uuid>,
    json: JsonBody<UpdateCartItemRequest>,
    depot: &mut Depot,
) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_uuid_or_403()?;

    let update = CartLineUpdate {
        quantity: json.into_inner().quantity,
    };

    let cart = state
        .app
        .carts
        .update_item(customer, product.into_inner().into(), update)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.try_into()?))
}
