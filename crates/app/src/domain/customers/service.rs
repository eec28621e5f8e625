//! Customers service.

use async_trait::async_trait;
use mockall::automock;
use tracing::info;

use crate::{
    database::Db,
    domain::customers::{
        data::{NewCustomer, ProfileUpdate},
        errors::CustomersServiceError,
        records::{CustomerRecord, CustomerUuid},
        repository::PgCustomersRepository,
    },
};

#[derive(Debug, Clone)]
pub struct PgCustomersService {
    db: Db,
    repository: PgCustomersRepository,
}

impl PgCustomersService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            repository: PgCustomersRepository::new(),
        }
    }
}

#[async_trait]
impl CustomersService for PgCustomersService {
    #[tracing::instrument(
        name = "customers.service.create_customer",
        skip(self, customer),
        fields(customer_uuid = %customer.uuid),
        err
    )]
    async fn create_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let created = self.repository.create_customer(&mut tx, customer).await?;

        tx.commit().await?;

        info!("created customer");

        Ok(created)
    }

    #[tracing::instrument(
        name = "customers.service.get_customer",
        skip(self),
        fields(customer_uuid = %customer),
        err
    )]
    async fn get_customer(
        &self,
        customer: CustomerUuid,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self
            .repository
            .find_customer(&mut tx, customer)
            .await?
            .ok_or(CustomersServiceError::NotFound)?;

        tx.commit().await?;

        Ok(record)
    }

    #[tracing::instrument(
        name = "customers.service.update_profile",
        skip(self, update),
        fields(customer_uuid = %customer),
        err
    )]
    async fn update_profile(
        &self,
        customer: CustomerUuid,
        update: ProfileUpdate,
    ) -> Result<CustomerRecord, CustomersServiceError> {
        let mut tx = self.db.begin().await?;

        let updated = self
            .repository
            .update_profile(&mut tx, customer, update.normalized())
            .await?;

        tx.commit().await?;

        info!(
            checkout_ready = updated.is_checkout_ready(),
            "updated customer profile"
        );

        Ok(updated)
    }

    async fn is_checkout_ready(&self, customer: CustomerUuid) -> Result<bool, CustomersServiceError> {
        let record = self.get_customer(customer).await?;

        Ok(record.is_checkout_ready())
    }
}

#[automock]
#[async_trait]
pub trait CustomersService: Send + Sync {
    /// Registers a customer with an empty profile.
    async fn create_customer(
        &self,
        customer: NewCustomer,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Retrieve a single customer.
    async fn get_customer(
        &self,
        customer: CustomerUuid,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Replaces the customer's delivery details.
    async fn update_profile(
        &self,
        customer: CustomerUuid,
        update: ProfileUpdate,
    ) -> Result<CustomerRecord, CustomersServiceError>;

    /// Whether address, city and phone are all present.
    async fn is_checkout_ready(&self, customer: CustomerUuid) -> Result<bool, CustomersServiceError>;
}
