//! Auth data models.

use jiff::Timestamp;
use uuid::Uuid;

use crate::{auth::ApiTokenVersion, domain::customers::records::CustomerUuid};

/// Who an authenticated request acts as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    Customer(CustomerUuid),
    Admin,
}

impl Principal {
    pub const fn customer_uuid(self) -> Option<CustomerUuid> {
        match self {
            Self::Customer(customer) => Some(customer),
            Self::Admin => None,
        }
    }

    pub const fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

/// API token data used during bearer authentication.
#[derive(Debug, Clone)]
pub(crate) struct ActiveApiToken {
    /// Customer the token acts for; `None` for administrator tokens.
    pub customer_uuid: Option<CustomerUuid>,

    /// Token format/hash version.
    pub version: ApiTokenVersion,

    /// SHA-256 verifier for the token secret material.
    pub token_hash: String,
}

/// API token metadata persisted in storage.
#[derive(Debug, Clone)]
pub struct ApiTokenMetadata {
    pub uuid: Uuid,
    pub customer_uuid: Option<CustomerUuid>,
    pub version: ApiTokenVersion,
    pub created_at: Timestamp,
    pub last_used_at: Option<Timestamp>,
    pub revoked_at: Option<Timestamp>,
}

/// New API token persistence payload.
#[derive(Debug, Clone)]
pub(crate) struct NewApiToken {
    pub uuid: Uuid,
    pub customer_uuid: Option<CustomerUuid>,
    pub version: ApiTokenVersion,
    pub token_hash: String,
}

/// API token issuance result with one-time raw token.
#[derive(Debug, Clone)]
pub struct IssuedApiToken {
    pub token: String,
    pub metadata: ApiTokenMetadata,
}
