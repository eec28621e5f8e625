//! Order Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::orders::OrdersServiceError;

pub(crate) fn into_status_error(error: OrdersServiceError) -> StatusError {
    match error {
        OrdersServiceError::CheckoutNotReady { missing } => StatusError::unprocessable_entity()
            .brief(format!(
                "Customer profile is incomplete, missing: {}",
                missing.join(", ")
            )),
        OrdersServiceError::EmptyCart => StatusError::conflict().brief("Cart is empty"),
        OrdersServiceError::ProductUnavailable(product) => {
            StatusError::conflict().brief(format!("Product {product} is no longer available"))
        }
        OrdersServiceError::InvalidTransition { from, transition } => StatusError::conflict()
            .brief(format!("Cannot {transition} an order that is {from}")),
        OrdersServiceError::ConcurrencyConflict => {
            StatusError::conflict().brief("Order is being modified concurrently, retry")
        }
        OrdersServiceError::AlreadyExists => StatusError::conflict().brief("Order already exists"),
        OrdersServiceError::OrderNotFound => StatusError::not_found().brief("Order not found"),
        OrdersServiceError::CustomerNotFound => {
            StatusError::not_found().brief("Customer not found")
        }
        OrdersServiceError::InvalidReference
        | OrdersServiceError::MissingRequiredData
        | OrdersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid order data")
        }
        OrdersServiceError::Sql(source) => {
            error!("order storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
