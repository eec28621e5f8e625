//! Authenticated principal stored in the depot by the auth middleware.

use salvo::prelude::{Depot, StatusError};

use storefront_app::{auth::Principal, domain::customers::records::CustomerUuid};

pub(crate) trait PrincipalExt {
    fn insert_principal(&mut self, principal: Principal);

    fn principal_or_401(&self) -> Result<Principal, StatusError>;

    /// The acting customer; administrators are refused.
    fn customer_uuid_or_403(&self) -> Result<CustomerUuid, StatusError>;

    fn require_admin(&self) -> Result<(), StatusError>;
}

impl PrincipalExt for Depot {
    fn insert_principal(&mut self, principal: Principal) {
        self.inject(principal);
    }

    fn principal_or_401(&self) -> Result<Principal, StatusError> {
        self.obtain::<Principal>()
            .copied()
            .map_err(|_missing| StatusError::unauthorized())
    }

    fn customer_uuid_or_403(&self) -> Result<CustomerUuid, StatusError> {
        self.principal_or_401()?
            .customer_uuid()
            .ok_or_else(|| StatusError::forbidden().brief("Customer token required"))
    }

    fn require_admin(&self) -> Result<(), StatusError> {
        if self.principal_or_401()?.is_admin() {
            Ok(())
        } else {
            Err(StatusError::forbidden().brief("Admin token required"))
        }
    }
}
