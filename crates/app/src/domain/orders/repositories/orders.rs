//! Orders Repository

use jiff_sqlx::Timestamp as SqlxTimestamp;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};

use crate::{
    database::{encode_amount, try_get_amount, try_get_count},
    domain::{
        customers::records::CustomerUuid,
        orders::{
            models::OrderDraft,
            records::{OrderRecord, OrderUuid},
            status::{OrderStatus, OrderTransition},
        },
    },
};

const CREATE_ORDER_SQL: &str = include_str!("../sql/create_order.sql");
const GET_ORDER_SQL: &str = include_str!("../sql/get_order.sql");
const LIST_ORDERS_SQL: &str = include_str!("../sql/list_orders.sql");
const LIST_CUSTOMER_ORDERS_SQL: &str = include_str!("../sql/list_customer_orders.sql");
const TRANSITION_ORDER_SQL: &str = include_str!("../sql/transition_order.sql");

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrdersRepository;

impl PgOrdersRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    /// Insert the order header in the `placed` status. Lines are inserted separately.
    pub(crate) async fn create_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        draft: &OrderDraft,
    ) -> Result<OrderRecord, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(CREATE_ORDER_SQL)
            .bind(draft.uuid.into_uuid())
            .bind(draft.customer_uuid.into_uuid())
            .bind(OrderStatus::Placed.as_str())
            .bind(encode_amount(draft.total_items, "total_items")?)
            .bind(encode_amount(draft.total_price, "total_price")?)
            .fetch_one(&mut **tx)
            .await
    }

    pub(crate) async fn find_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(GET_ORDER_SQL)
            .bind(order.into_uuid())
            .fetch_optional(&mut **tx)
            .await
    }

    pub(crate) async fn list_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_ORDERS_SQL)
            .fetch_all(&mut **tx)
            .await
    }

    pub(crate) async fn list_customer_orders(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        customer: CustomerUuid,
    ) -> Result<Vec<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(LIST_CUSTOMER_ORDERS_SQL)
            .bind(customer.into_uuid())
            .fetch_all(&mut **tx)
            .await
    }

    /// Apply a transition to an order still in the transition's source status.
    /// `None` when the order does not exist or has already left that status.
    pub(crate) async fn transition_order(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        transition: OrderTransition,
    ) -> Result<Option<OrderRecord>, sqlx::Error> {
        query_as::<Postgres, OrderRecord>(TRANSITION_ORDER_SQL)
            .bind(order.into_uuid())
            .bind(transition.target().as_str())
            .bind(transition.source().as_str())
            .fetch_optional(&mut **tx)
            .await
    }
}

impl<'r> FromRow<'r, PgRow> for OrderRecord {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        let status: String = row.try_get("status")?;

        let status = status
            .parse::<OrderStatus>()
            .map_err(|e| sqlx::Error::ColumnDecode {
                index: "status".to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            uuid: OrderUuid::from_uuid(row.try_get("uuid")?),
            customer_uuid: CustomerUuid::from_uuid(row.try_get("customer_uuid")?),
            status,
            total_items: try_get_count(row, "total_items")?,
            total_price: try_get_amount(row, "total_price")?,
            version: try_get_count(row, "version")?,
            lines: Vec::new(),
            created_at: row.try_get::<SqlxTimestamp, _>("created_at")?.to_jiff(),
            updated_at: row.try_get::<SqlxTimestamp, _>("updated_at")?.to_jiff(),
        })
    }
}
