//! Order Data

use crate::domain::orders::records::OrderUuid;

/// New Order Data
///
/// The caller picks the order UUID so a retried checkout is rejected as a
/// duplicate instead of placing a second order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewOrder {
    pub uuid: OrderUuid,
}
