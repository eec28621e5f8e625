//! Orders
//!
//! Customers see and cancel only their own orders; another customer's order
//! is reported as not found.

mod errors;
mod handlers;

pub(crate) use errors::into_status_error;
pub(crate) use handlers::*;
