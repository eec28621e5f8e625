//! Storefront domain services and persistence: catalog lookup, customer
//! profiles, carts, and the cart-to-order checkout with its order lifecycle.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;

#[cfg(test)]
mod test;

mod uuids;

pub use uuids::TypedUuid;
