//! Order Lines Repository

use rustc_hash::FxHashMap;
use sqlx::{FromRow, Postgres, Row, Transaction, postgres::PgRow, query_as};
use uuid::Uuid;

use crate::{
    database::{encode_amount, try_get_amount, try_get_quantity},
    domain::{
        orders::{
            models::OrderLineDraft,
            records::{OrderLineRecord, OrderLineUuid, OrderUuid},
        },
        products::records::ProductUuid,
    },
};

const CREATE_ORDER_LINE_SQL: &str = include_str!("../sql/create_order_line.sql");
const LIST_ORDER_LINES_SQL: &str = include_str!("../sql/list_order_lines.sql");

/// An order line together with the order it belongs to.
struct OrderLineRow {
    order_uuid: OrderUuid,
    line: OrderLineRecord,
}

#[derive(Debug, Clone, Default)]
pub(crate) struct PgOrderLinesRepository;

impl PgOrderLinesRepository {
    #[must_use]
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) async fn create_line(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        order: OrderUuid,
        line: &OrderLineDraft,
    ) -> Result<OrderLineRecord, sqlx::Error> {
        let row = query_as::<Postgres, OrderLineRow>(CREATE_ORDER_LINE_SQL)
            .bind(line.uuid.into_uuid())
            .bind(order.into_uuid())
            .bind(encode_quantity(line.position, "position")?)
            .bind(line.product_uuid.into_uuid())
            .bind(encode_quantity(line.quantity, "quantity")?)
            .bind(encode_amount(line.unit_price, "unit_price")?)
            .bind(encode_amount(line.line_total, "line_total")?)
            .fetch_one(&mut **tx)
            .await?;

        Ok(row.line)
    }

    /// Lines for each of the given orders, in position order.
    pub(crate) async fn list_lines(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        orders: &[OrderUuid],
    ) -> Result<FxHashMap<OrderUuid, Vec<OrderLineRecord>>, sqlx::Error> {
        let order_uuids: Vec<Uuid> = orders.iter().map(|order| order.into_uuid()).collect();

        let rows = query_as::<Postgres, OrderLineRow>(LIST_ORDER_LINES_SQL)
            .bind(order_uuids)
            .fetch_all(&mut **tx)
            .await?;

        let mut lines: FxHashMap<OrderUuid, Vec<OrderLineRecord>> = FxHashMap::default();

        for row in rows {
            lines.entry(row.order_uuid).or_default().push(row.line);
        }

        Ok(lines)
    }
}

fn encode_quantity(value: u32, col: &str) -> Result<i32, sqlx::Error> {
    i32::try_from(value).map_err(|e| sqlx::Error::ColumnDecode {
        index: col.to_string(),
        source: Box::new(e),
    })
}

impl<'r> FromRow<'r, PgRow> for OrderLineRow {
    fn from_row(row: &'r PgRow) -> sqlx::Result<Self> {
        Ok(Self {
            order_uuid: OrderUuid::from_uuid(row.try_get("order_uuid")?),
            line: OrderLineRecord {
                uuid: OrderLineUuid::from_uuid(row.try_get("uuid")?),
                position: try_get_quantity(row, "position")?,
                product_uuid: ProductUuid::from_uuid(row.try_get("product_uuid")?),
                quantity: try_get_quantity(row, "quantity")?,
                unit_price: try_get_amount(row, "unit_price")?,
                line_total: try_get_amount(row, "line_total")?,
            },
        })
    }
}
