//! Update Profile Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};

use storefront_app::domain::customers::data::ProfileUpdate;

use crate::{
    extensions::*,
    profile::{errors::into_status_error, get::ProfileResponse},
    state::State,
};

/// Update Profile Request
///
/// Replaces all three delivery fields; omitted or blank values clear them.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct UpdateProfileRequest {
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
}

impl From<UpdateProfileRequest> for ProfileUpdate {
    fn from(request: UpdateProfileRequest) -> Self {
        ProfileUpdate {
            address: request.address,
            city: request.city,
            phone: request.phone,
        }
    }
}

/// Update Profile Handler
#[endpoint(
    tags("profile"),
    summary = "Update Profile",
    security(("bearer_auth" = [])),
    responses(
        (status_code = StatusCode::OK, description = "Profile updated"),
        (status_code = StatusCode::NOT_FOUND, description = "Customer not found"),
        (status_code = StatusCode::FORBIDDEN, description = "Customer token required"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<UpdateProfileRequest>,
    depot: &mut Depot,
) -> Result<Json<ProfileResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let customer = depot.customer_uuid_or_403()?;

    let customer = state
        .app
        .customers
        .update_profile(customer, json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(Json(customer.into()))
}
