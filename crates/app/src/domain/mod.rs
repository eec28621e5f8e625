//! Storefront Domain Concerns

pub mod carts;
pub mod customers;
pub mod orders;
pub mod products;
