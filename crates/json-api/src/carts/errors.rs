//! Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::carts::CartsServiceError;

pub(crate) fn into_status_error(error: CartsServiceError) -> StatusError {
    match error {
        CartsServiceError::ProductNotFound(product) => {
            StatusError::not_found().brief(format!("Product {product} not found"))
        }
        CartsServiceError::LineNotFound(product) => {
            StatusError::not_found().brief(format!("Product {product} is not in the cart"))
        }
        CartsServiceError::NotFound => StatusError::not_found().brief("Cart not found"),
        CartsServiceError::InvalidQuantity => {
            StatusError::bad_request().brief("Quantity must be a positive whole number in range")
        }
        CartsServiceError::ProductUnavailable(product) => {
            StatusError::conflict().brief(format!("Product {product} is not available"))
        }
        CartsServiceError::ConcurrencyConflict => {
            StatusError::conflict().brief("Cart is being modified concurrently, retry")
        }
        CartsServiceError::InvalidReference
        | CartsServiceError::MissingRequiredData
        | CartsServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid cart payload")
        }
        CartsServiceError::Sql(source) => {
            error!("cart storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
