//! Orders service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::{
    database::{is_concurrency_conflict, is_out_of_range},
    domain::{
        orders::{
            models::TotalsOverflow,
            status::{OrderStatus, OrderTransition},
        },
        products::records::ProductUuid,
    },
};

#[derive(Debug, Error)]
pub enum OrdersServiceError {
    #[error("customer profile is incomplete, missing: {}", .missing.join(", "))]
    CheckoutNotReady { missing: Vec<&'static str> },

    #[error("cart is empty")]
    EmptyCart,

    #[error("product {0} is no longer available")]
    ProductUnavailable(ProductUuid),

    #[error("order not found")]
    OrderNotFound,

    #[error("customer not found")]
    CustomerNotFound,

    #[error("cannot {transition} an order that is {from}")]
    InvalidTransition {
        from: OrderStatus,
        transition: OrderTransition,
    },

    #[error("order already exists")]
    AlreadyExists,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("order is being modified concurrently")]
    ConcurrencyConflict,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for OrdersServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::OrderNotFound;
        }

        if is_concurrency_conflict(&error) {
            return Self::ConcurrencyConflict;
        }

        if is_out_of_range(&error) {
            return Self::InvalidData;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::UniqueViolation) => Self::AlreadyExists,
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}

impl From<TotalsOverflow> for OrdersServiceError {
    fn from(_: TotalsOverflow) -> Self {
        Self::InvalidData
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkout_not_ready_lists_missing_fields() {
        let error = OrdersServiceError::CheckoutNotReady {
            missing: vec!["city", "phone"],
        };

        assert_eq!(
            error.to_string(),
            "customer profile is incomplete, missing: city, phone"
        );
    }

    #[test]
    fn invalid_transition_names_status_and_transition() {
        let error = OrdersServiceError::InvalidTransition {
            from: OrderStatus::Accepted,
            transition: OrderTransition::Cancel,
        };

        assert_eq!(error.to_string(), "cannot cancel an order that is accepted");
    }
}
