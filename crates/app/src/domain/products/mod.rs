//! Products
//!
//! The catalog the cart and checkout resolve prices and availability against.

pub mod data;
pub mod errors;
pub mod records;
pub(crate) mod repository;
pub mod service;

pub use errors::ProductsServiceError;
pub use service::*;
