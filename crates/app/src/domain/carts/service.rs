//! Carts service.

use async_trait::async_trait;
use mockall::automock;
use sqlx::{Postgres, Transaction};
use tracing::{debug, info};

use crate::{
    database::Db,
    domain::{
        carts::{
            data::{CartLineUpdate, NewCartLine},
            errors::CartsServiceError,
            models::{Cart, CartTotals},
            records::CartRecord,
            repositories::{PgCartLinesRepository, PgCartsRepository},
        },
        customers::records::CustomerUuid,
        products::{records::ProductUuid, repository::PgProductsRepository},
    },
};

#[derive(Debug, Clone)]
pub struct PgCartsService {
    db: Db,
    carts_repository: PgCartsRepository,
    lines_repository: PgCartLinesRepository,
    products_repository: PgProductsRepository,
}

impl PgCartsService {
    #[must_use]
    pub fn new(db: Db) -> Self {
        Self {
            db,
            carts_repository: PgCartsRepository::new(),
            lines_repository: PgCartLinesRepository::new(),
            products_repository: PgProductsRepository::new(),
        }
    }

    /// Recompute the persisted totals from the cart's lines and bump its version.
    async fn recompute(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: &CartRecord,
    ) -> Result<Cart, CartsServiceError> {
        let lines = self.lines_repository.list_lines(tx, cart.uuid).await?;

        let totals = CartTotals::from_lines(&lines).ok_or(CartsServiceError::InvalidData)?;

        let updated = self
            .carts_repository
            .update_totals(tx, cart.uuid, totals)
            .await?;

        Ok(Cart::from_record(updated, lines))
    }
}

#[async_trait]
impl CartsService for PgCartsService {
    async fn get_cart(&self, customer: CustomerUuid) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let Some(record) = self.carts_repository.find_cart(&mut tx, customer).await? else {
            tx.commit().await?;

            return Ok(Cart::empty(customer));
        };

        let lines = self.lines_repository.list_lines(&mut tx, record.uuid).await?;

        tx.commit().await?;

        Ok(Cart::from_record(record, lines))
    }

    #[tracing::instrument(
        name = "carts.service.add_item",
        skip(self, line),
        fields(
            customer_uuid = %customer,
            product_uuid = %line.product_uuid,
            quantity = line.quantity
        ),
        err
    )]
    async fn add_item(
        &self,
        customer: CustomerUuid,
        line: NewCartLine,
    ) -> Result<Cart, CartsServiceError> {
        if line.quantity <= 0 {
            return Err(CartsServiceError::InvalidQuantity);
        }

        let mut tx = self.db.begin().await?;

        let record = self
            .carts_repository
            .ensure_and_lock_cart(&mut tx, customer)
            .await?;

        let product = self
            .products_repository
            .resolve_product(&mut tx, line.product_uuid)
            .await?
            .ok_or(CartsServiceError::ProductNotFound(line.product_uuid))?;

        if !product.available {
            return Err(CartsServiceError::ProductUnavailable(line.product_uuid));
        }

        self.lines_repository
            .add_line(
                &mut tx,
                record.uuid,
                line.product_uuid,
                line.quantity,
                product.price,
            )
            .await?;

        let cart = self.recompute(&mut tx, &record).await?;

        tx.commit().await?;

        info!(
            unit_price = product.price,
            total_items = cart.total_items,
            total_price = cart.total_price,
            version = cart.version,
            "added item to cart"
        );

        Ok(cart)
    }

    #[tracing::instrument(
        name = "carts.service.update_item",
        skip(self, update),
        fields(customer_uuid = %customer, product_uuid = %product, quantity = update.quantity),
        err
    )]
    async fn update_item(
        &self,
        customer: CustomerUuid,
        product: ProductUuid,
        update: CartLineUpdate,
    ) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let record = self
            .carts_repository
            .lock_cart(&mut tx, customer)
            .await?
            .ok_or(CartsServiceError::LineNotFound(product))?;

        let rows_affected = if update.quantity <= 0 {
            self.lines_repository
                .delete_line(&mut tx, record.uuid, product)
                .await?
        } else {
            self.lines_repository
                .set_quantity(&mut tx, record.uuid, product, update.quantity)
                .await?
        };

        if rows_affected == 0 {
            return Err(CartsServiceError::LineNotFound(product));
        }

        let cart = self.recompute(&mut tx, &record).await?;

        tx.commit().await?;

        info!(
            total_items = cart.total_items,
            total_price = cart.total_price,
            version = cart.version,
            "updated cart item"
        );

        Ok(cart)
    }

    #[tracing::instrument(
        name = "carts.service.remove_item",
        skip(self),
        fields(customer_uuid = %customer, product_uuid = %product),
        err
    )]
    async fn remove_item(
        &self,
        customer: CustomerUuid,
        product: ProductUuid,
    ) -> Result<Cart, CartsServiceError> {
        let mut tx = self.db.begin().await?;

        let Some(record) = self.carts_repository.lock_cart(&mut tx, customer).await? else {
            tx.commit().await?;

            return Ok(Cart::empty(customer));
        };

        let rows_affected = self
            .lines_repository
            .delete_line(&mut tx, record.uuid, product)
            .await?;

        if rows_affected == 0 {
            let lines = self.lines_repository.list_lines(&mut tx, record.uuid).await?;

            tx.commit().await?;

            debug!("product not in cart, nothing to remove");

            return Ok(Cart::from_record(record, lines));
        }

        let cart = self.recompute(&mut tx, &record).await?;

        tx.commit().await?;

        info!(
            total_items = cart.total_items,
            total_price = cart.total_price,
            version = cart.version,
            "removed item from cart"
        );

        Ok(cart)
    }
}

#[automock]
#[async_trait]
pub trait CartsService: Send + Sync {
    /// Retrieve the customer's cart, empty if nothing has been added yet.
    async fn get_cart(&self, customer: CustomerUuid) -> Result<Cart, CartsServiceError>;

    /// Add a quantity of a product at its current price, merging with an
    /// existing line for the same product.
    async fn add_item(
        &self,
        customer: CustomerUuid,
        line: NewCartLine,
    ) -> Result<Cart, CartsServiceError>;

    /// Set the quantity of an existing line; zero or less removes it.
    async fn update_item(
        &self,
        customer: CustomerUuid,
        product: ProductUuid,
        update: CartLineUpdate,
    ) -> Result<Cart, CartsServiceError>;

    /// Remove the line for a product if present.
    async fn remove_item(
        &self,
        customer: CustomerUuid,
        product: ProductUuid,
    ) -> Result<Cart, CartsServiceError>;
}
