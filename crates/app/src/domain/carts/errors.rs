//! Carts service errors.

use sqlx::{
    Error,
    error::{DatabaseError, ErrorKind},
};
use thiserror::Error;

use crate::{
    database::{is_concurrency_conflict, is_out_of_range},
    domain::products::records::ProductUuid,
};

#[derive(Debug, Error)]
pub enum CartsServiceError {
    #[error("product {0} not found")]
    ProductNotFound(ProductUuid),

    #[error("product {0} is not available")]
    ProductUnavailable(ProductUuid),

    #[error("quantity must be greater than zero and within range")]
    InvalidQuantity,

    #[error("product {0} is not in the cart")]
    LineNotFound(ProductUuid),

    #[error("cart not found")]
    NotFound,

    #[error("related resource not found")]
    InvalidReference,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("invalid data")]
    InvalidData,

    #[error("cart is being modified concurrently")]
    ConcurrencyConflict,

    #[error("storage error")]
    Sql(#[source] Error),
}

impl From<Error> for CartsServiceError {
    fn from(error: Error) -> Self {
        if matches!(error, Error::RowNotFound) {
            return Self::NotFound;
        }

        if is_concurrency_conflict(&error) {
            return Self::ConcurrencyConflict;
        }

        // Quantities accumulate in an INTEGER column.
        if is_out_of_range(&error) {
            return Self::InvalidQuantity;
        }

        match error.as_database_error().map(DatabaseError::kind) {
            Some(ErrorKind::ForeignKeyViolation) => Self::InvalidReference,
            Some(ErrorKind::NotNullViolation) => Self::MissingRequiredData,
            Some(ErrorKind::CheckViolation) => Self::InvalidData,
            Some(ErrorKind::Other | _) | None => Self::Sql(error),
        }
    }
}
