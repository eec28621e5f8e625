//! Orders
//!
//! Checkout turns a customer's cart into an immutable order; afterwards only
//! the order's status may change.

pub mod data;
pub mod errors;
pub mod models;
pub mod records;
mod repositories;
pub mod service;
pub mod status;

pub use errors::OrdersServiceError;
pub use service::*;
pub use status::{OrderStatus, OrderTransition};
