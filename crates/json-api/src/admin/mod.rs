//! Admin
//!
//! Routes for administrator tokens only.

pub(crate) mod orders;
