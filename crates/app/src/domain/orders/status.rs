//! Order status state machine.
//!
//! ```text
//! placed --accept--> accepted
//! placed --cancel--> cancelled
//! ```
//!
//! `accepted` and `cancelled` are terminal.

use std::{
    fmt::{Display, Formatter, Result as FmtResult},
    str::FromStr,
};

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderStatus {
    Placed,
    Accepted,
    Cancelled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OrderTransition {
    Accept,
    Cancel,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown order status: {0}")]
pub struct UnknownOrderStatus(String);

impl OrderStatus {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Placed => "placed",
            Self::Accepted => "accepted",
            Self::Cancelled => "cancelled",
        }
    }

    /// The status reached by applying `transition`, or `None` when the
    /// transition is not allowed from this status.
    pub fn apply(self, transition: OrderTransition) -> Option<Self> {
        (self == transition.source()).then_some(transition.target())
    }
}

impl OrderTransition {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Cancel => "cancel",
        }
    }

    /// The only status this transition may start from.
    pub const fn source(self) -> OrderStatus {
        match self {
            Self::Accept | Self::Cancel => OrderStatus::Placed,
        }
    }

    /// Status an order ends up in after this transition succeeds.
    pub const fn target(self) -> OrderStatus {
        match self {
            Self::Accept => OrderStatus::Accepted,
            Self::Cancel => OrderStatus::Cancelled,
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl Display for OrderTransition {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = UnknownOrderStatus;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "placed" => Ok(Self::Placed),
            "accepted" => Ok(Self::Accepted),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(UnknownOrderStatus(other.to_string())),
        }
    }
}
