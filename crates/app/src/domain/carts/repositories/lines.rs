//! Cart Lines Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query, query_as};

use crate::{
    database::{encode_amount, try_get_amount, try_get_quantity},
    domain::{
        carts::records::{CartLineRecord, CartUuid},
        products::records::ProductUuid,
    },
};

const LIST_CART_LINES_SQL: &str = include_str!("../sql/list_cart_lines.sql");
const ADD_CART_LINE_SQL: &str = include_str!("../sql/add_cart_line.sql");
const SET_CART_LINE_QUANTITY_SQL: &str = include_str!("../sql/set_cart_line_quantity.sql");
const DELETE_CART_LINE_SQL: &str = include_str!("../sql/delete_cart_line.sql");
const CLEAR_CART_LINES_SQL: &str = include_str!("../sql/clear_cart_lines.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgCartLinesRepository;

impl PgCartLinesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn list_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<Vec<CartLineRecord>, sqlx::Error> {
        query_as::<Postgres, CartLineRecord>(LIST_CART_LINES_SQL)
            .bind(cart.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Insert a line, or merge the quantity into the existing line for the
    /// product and refresh its unit price.
    pub(crate) async fn add_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        product: ProductUuid,
        quantity: i32,
        unit_price: u64,
    ) -> Result<(), sqlx::Error> {
        query(ADD_CART_LINE_SQL)
            .bind(cart.into_uuid())
            .bind(product.into_uuid())
            .bind(quantity)
            .bind(encode_amount(unit_price, "unit_price")?)
            .execute(&mut **tx)
            .await?;

        Ok(())
    }

    pub(crate) async fn set_quantity(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        product: ProductUuid,
        quantity: i32,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(SET_CART_LINE_QUANTITY_SQL)
            .bind(cart.into_uuid())
            .bind(product.into_uuid())
            .bind(quantity)
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn delete_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
        product: ProductUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(DELETE_CART_LINE_SQL)
            .bind(cart.into_uuid())
            .bind(product.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }

    pub(crate) async fn clear_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        cart: CartUuid,
    ) -> Result<u64, sqlx::Error> {
        let rows_affected = query(CLEAR_CART_LINES_SQL)
            .bind(cart.into_uuid())
            .execute(&mut **tx)
            .await?
            .rows_affected();

        Ok(rows_affected)
    }
}

impl<'r> FromRow<'r, PgRow> for CartLineRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
            quantity: try_get_quantity(row, "quantity")?,
            unit_price: try_get_amount(row, "unit_price")?,
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
