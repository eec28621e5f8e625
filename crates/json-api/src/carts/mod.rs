//! Carts
//!
//! Every route acts on the authenticated customer's own cart.

mod errors;
mod handlers;
pub(crate) mod items;

pub(crate) use handlers::*;
