//! Auth service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::{
    auth::{
        ApiTokenMetadata, ApiTokenVersion, AuthServiceError, IssuedApiToken, Principal,
        format_api_token, generate_api_token_secret, hash_api_token, models::NewApiToken,
        parse_api_token, repository::PgAuthRepository, verifiers_match,
    },
    domain::customers::records::CustomerUuid,
};

#[derive(Debug, Clone)]
pub struct PgAuthService {
    repository: PgAuthRepository,
}

impl PgAuthService {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: PgAuthRepository::new(pool),
        }
    }

    /// Issue a new API token acting as the given customer.
    ///
    /// # Errors
    ///
    /// Returns an error if database insertion fails.
    pub async fn issue_customer_token(
        &self,
        customer: CustomerUuid,
    ) -> Result<IssuedApiToken, AuthServiceError> {
        self.issue_api_token(Some(customer)).await
    }

    /// Issue a new administrator API token.
    ///
    /// # Errors
    ///
    /// Returns an error if database insertion fails.
    pub async fn issue_admin_token(&self) -> Result<IssuedApiToken, AuthServiceError> {
        self.issue_api_token(None).await
    }

    #[tracing::instrument(name = "auth.service.issue_api_token", skip(self), err)]
    async fn issue_api_token(
        &self,
        customer: Option<CustomerUuid>,
    ) -> Result<IssuedApiToken, AuthServiceError> {
        let token_uuid = Uuid::now_v7();
        let version = ApiTokenVersion::V1;
        let secret = generate_api_token_secret();
        let token = format_api_token(token_uuid, version, &secret);

        let metadata = self
            .repository
            .create_api_token(&NewApiToken {
                uuid: token_uuid,
                customer_uuid: customer,
                version,
                token_hash: hash_api_token(&token_uuid, version, &secret),
            })
            .await?;

        info!(token_uuid = %token_uuid, "issued api token");

        Ok(IssuedApiToken { token, metadata })
    }

    /// List tokens for a customer, or administrator tokens when `customer` is `None`.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list_api_tokens(
        &self,
        customer: Option<CustomerUuid>,
    ) -> Result<Vec<ApiTokenMetadata>, AuthServiceError> {
        Ok(self.repository.list_api_tokens(customer).await?)
    }

    /// Revoke a token by UUID. Returns `true` if the token was active.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn revoke_api_token(&self, token_uuid: Uuid) -> Result<bool, AuthServiceError> {
        let revoked = self.repository.revoke_api_token(token_uuid).await?;

        Ok(revoked.is_some())
    }
}

#[async_trait]
impl AuthService for PgAuthService {
    async fn authenticate_bearer(&self, bearer_token: &str) -> Result<Principal, AuthServiceError> {
        let parsed_token = match parse_api_token(bearer_token) {
            Ok(parsed_token) => parsed_token,
            Err(error) => {
                debug!(%error, "rejected malformed bearer token");

                return Err(AuthServiceError::NotFound);
            }
        };

        let token = self
            .repository
            .find_active_api_token_by_uuid(parsed_token.token_uuid, parsed_token.version)
            .await?
            .ok_or(AuthServiceError::NotFound)?;

        let presented = hash_api_token(
            &parsed_token.token_uuid,
            parsed_token.version,
            &parsed_token.secret,
        );

        if !verifiers_match(&token.token_hash, &presented) {
            return Err(AuthServiceError::NotFound);
        }

        // Best-effort metadata update; auth success should not depend on this write.
        let _touch_result = self
            .repository
            .touch_api_token_last_used(parsed_token.token_uuid)
            .await;

        Ok(token
            .customer_uuid
            .map_or(Principal::Admin, Principal::Customer))
    }
}

#[automock]
#[async_trait]
pub trait AuthService: Send + Sync {
    /// Resolve a bearer token to the principal it acts as.
    async fn authenticate_bearer(&self, bearer_token: &str)
    -> Result<Principal, AuthServiceError>;
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::test::TestContext;

    use super::*;

    #[tokio::test]
    async fn customer_token_authenticates_as_customer() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_customer("Ada").await;

        let issued = ctx.auth.issue_customer_token(customer).await?;

        assert_eq!(issued.metadata.customer_uuid, Some(customer));
        assert!(issued.metadata.last_used_at.is_none());

        let principal = ctx.auth.authenticate_bearer(&issued.token).await?;

        assert_eq!(principal, Principal::Customer(customer));

        let tokens = ctx.auth.list_api_tokens(Some(customer)).await?;

        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].last_used_at.is_some());

        Ok(())
    }

    #[tokio::test]
    async fn admin_token_authenticates_as_admin() -> TestResult {
        let ctx = TestContext::new().await;

        let issued = ctx.auth.issue_admin_token().await?;

        assert!(issued.metadata.customer_uuid.is_none());
        assert_eq!(
            ctx.auth.authenticate_bearer(&issued.token).await?,
            Principal::Admin
        );

        Ok(())
    }

    #[tokio::test]
    async fn tampered_secret_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let issued = ctx.auth.issue_admin_token().await?;

        let (id, secret) = issued.token.split_once('.').expect("token has a secret");
        let flipped = if secret.starts_with('0') { "1" } else { "0" };
        let tampered = format!("{id}.{flipped}{}", &secret[1..]);

        let result = ctx.auth.authenticate_bearer(&tampered).await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }

    #[tokio::test]
    async fn malformed_token_is_rejected() {
        let ctx = TestContext::new().await;

        let result = ctx.auth.authenticate_bearer("not-a-token").await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );
    }

    #[tokio::test]
    async fn revoked_token_is_rejected() -> TestResult {
        let ctx = TestContext::new().await;
        let customer = ctx.create_customer("Ada").await;
        let issued = ctx.auth.issue_customer_token(customer).await?;

        assert!(ctx.auth.revoke_api_token(issued.metadata.uuid).await?);
        assert!(!ctx.auth.revoke_api_token(issued.metadata.uuid).await?);

        let result = ctx.auth.authenticate_bearer(&issued.token).await;

        assert!(
            matches!(result, Err(AuthServiceError::NotFound)),
            "expected NotFound, got {result:?}"
        );

        Ok(())
    }
}
