//! Carts
//!
//! One mutable cart per customer. Every mutation runs under a row lock on the
//! customer's cart and leaves the persisted totals equal to the sum of its lines.

pub mod data;
pub mod errors;
pub mod models;
pub mod records;
pub(crate) mod repositories;
pub mod service;

pub use errors::CartsServiceError;
pub use service::*;
