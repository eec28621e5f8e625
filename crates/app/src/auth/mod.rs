//! Authentication
//!
//! Bearer API tokens resolve to either a customer or an administrator.

mod errors;
mod models;
mod repository;
mod service;
mod token;

pub use errors::*;
pub use models::*;
pub use service::*;
pub use token::*;
