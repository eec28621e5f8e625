//! Carts Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    database::{encode_amount, try_get_amount, try_get_count},
    domain::{
        carts::{
            models::CartTotals,
            records::{CartRecord, CartUuid},
        },
        customers::records::CustomerUuid,
    },
};

const FIND_CART_SQL: &str = include_str!("../sql/find_cart.sql");
const LOCK_CART_SQL: &str = include_str!("../sql/lock_cart.sql");
const ENSURE_CART_SQL: &str = include_str!("../sql/ensure_cart.sql");
const UPDATE_CART_TOTALS_SQL: &str = include_str!("../sql/update_cart_totals.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartsRepository;

impl PgCartsRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Read the customer's cart without locking it.
    pub(crate) async fn find_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<Option<CartRecord>, sqlx::Error> {
        query_as::<Postgres, CartRecord>(FIND_CART_SQL)
            .bind(customer.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Lock the customer's cart row for the rest of the transaction.
    pub(crate) async fn lock_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<Option<CartRecord>, sqlx::Error> {
        query_as::<Postgres, CartRecord>(LOCK_CART_SQL)
            .bind(customer.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    /// Create the customer's cart if it does not exist yet, then lock it.
    pub(crate) async fn ensure_and_lock_cart(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<CartRecord, sqlx::Error> {
        query(ENSURE_CART_SQL)
            .bind(CartUuid::new().into_uuid())
            .bind(customer.into_uuid())
            .execute(&mut **tx)
            .await?;

        self.lock_cart(tx, customer)
            .await?
            .ok_or(sqlx::Error::RowNotFound)
    }

    pub(crate) async fn update_totals(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        totals: CartTotals,
    ) -> Result<CartRecord, sqlx::Error> {
        query_as::<Postgres, CartRecord>(UPDATE_CART_TOTALS_SQL)
            .bind(cart.into_uuid())
            .bind(encode_amount(totals.total_items, "total_items")?)
            .bind(encode_amount(totals.total_price, "total_price")?)
            .fetch_one(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for CartRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            uuid: CartUuid::from_uuid(row.try_get("uuid")?),
            customer_uuid: CustomerUuid::from_uuid(row.try_get("customer_uuid")?),
            total_items: try_get_count(row, "total_items")?,
            total_price: try_get_amount(row, "total_price")?,
            version: try_get_count(row, "version")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
