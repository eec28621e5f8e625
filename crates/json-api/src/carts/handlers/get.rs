//! Get Cart Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use storefront_app::domain::carts::{models::Cart, records::CartLineRecord};

use crate::{carts::errors::into_status_error, extensions::*, state::State};

/// Cart Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartResponse {
    /// The customer owning the cart
    pub customer_uuid: Uuid,

    /// The lines in the cart, oldest first
    pub lines: Vec<CartLineResponse>,

    /// Sum of all line quantities
    pub total_items: u64,

    /// Sum of all line totals in minor units
    pub total_price: u64,

    /// Incremented on every mutation
    pub version: u64,

    /// The date and time the cart was last changed, absent for a cart never used
    pub updated_at: Option<String>,
}

/// Cart Line Response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CartLineResponse {
    /// The product on this line
    pub product_uuid: Uuid,

    /// Units of the product
    pub quantity: u32,

    /// Price per unit captured when the product was last added
    pub unit_price: u64,

    /// `quantity * unit_price`
    pub line_total: u64,
}

impl TryFrom<CartLineRecord> for CartLineResponse {
    type Error = StatusError;

    fn try_from(line: CartLineRecord) -> Result<Self, Self::Error> {
        Ok(Self {
            line_total: line.line_total().or_500("cart line total overflows")?,
            product_uuid: line.product_uuid.into(),
            quantity: line.quantity,
            unit_price: line.unit_price,
        })
    }
}

impl TryFrom<Cart> for CartResponse {
    type Error = StatusError;

    fn try_from(cart: Cart) -> Result<Self, Self::Error> {
        Ok(Self {
            customer_uuid: cart.customer_uuid.into(),
            lines: cart
                .lines
                .into_iter()
                .map(CartLineResponse::try_from)
                .collect::<Result<_, _>>()?,
            total_items: cart.total_items,
            total_price: cart.total_price,
            version: cart.version,
            updated_at: cart.updated_at.map(|at| at.to_string()),
        })
    }
}

/// Get Cart Handler
///
/// Returns the customer's cart; a customer who never added anything gets an
/// empty cart.
#[endpoint(
    tags("cart"),
    summary = "Get Cart",
    security(("bearer_auth" = []))
)]
pub(crate) async fn handler(depot: &mut Depot) -> Result<Json<CartResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_uuid_or_403()?;

    let cart = state
        .app
        .carts
        .get_cart(customer)
        .await
        .map_err(into_status_error)?;

    Ok(Json(cart.try_into()?))
}
