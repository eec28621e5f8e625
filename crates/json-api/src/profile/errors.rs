//! Profile Errors

use salvo::http::StatusError;
use tracing::error;

use storefront_app::domain::customers::CustomersServiceError;

pub(crate) fn into_status_error(error: CustomersServiceError) -> StatusError {
    match error {
        CustomersServiceError::NotFound => StatusError::not_found().brief("Customer not found"),
        CustomersServiceError::AlreadyExists => {
            StatusError::conflict().brief("Customer already exists")
        }
        CustomersServiceError::InvalidReference
        | CustomersServiceError::MissingRequiredData
        | CustomersServiceError::InvalidData => {
            StatusError::bad_request().brief("Invalid profile payload")
        }
        CustomersServiceError::ConcurrencyConflict => {
            StatusError::conflict().brief("Profile is being modified concurrently")
        }
        CustomersServiceError::Sql(source) => {
            error!("customer storage error: {source}");

            StatusError::internal_server_error()
        }
    }
}
