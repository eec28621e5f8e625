//! Order Models

use crate::{
    database::MAX_STORED_AMOUNT,
    domain::{
        customers::records::CustomerUuid,
        orders::records::{OrderLineUuid, OrderUuid},
        products::records::ProductUuid,
    },
};

/// An order assembled from a cart snapshot, not yet persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    pub uuid: OrderUuid,
    pub customer_uuid: CustomerUuid,
    pub lines: Vec<OrderLineDraft>,
    pub total_items: u64,
    pub total_price: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLineDraft {
    pub uuid: OrderLineUuid,
    pub position: u32,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
    pub unit_price: u64,
    pub line_total: u64,
}

/// Money or item totals overflowed, or outgrew a `BIGINT` column, while
/// building an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TotalsOverflow;

impl OrderDraft {
    #[must_use]
    pub fn new(uuid: OrderUuid, customer: CustomerUuid) -> Self {
        Self {
            uuid,
            customer_uuid: customer,
            lines: Vec::new(),
            total_items: 0,
            total_price: 0,
        }
    }

    /// Append a line priced at `unit_price`, keeping the order totals equal to
    /// the sum of the lines.
    pub fn push_line(
        &mut self,
        product: ProductUuid,
        quantity: u32,
        unit_price: u64,
    ) -> Result<(), TotalsOverflow> {
        let position = u32::try_from(self.lines.len())
            .ok()
            .ok_or(TotalsOverflow)?;
        let line_total = unit_price
            .checked_mul(u64::from(quantity))
            .ok_or(TotalsOverflow)?;

        let total_items = self
            .total_items
            .checked_add(u64::from(quantity))
            .ok_or(TotalsOverflow)?;
        let total_price = self
            .total_price
            .checked_add(line_total)
            .ok_or(TotalsOverflow)?;

        if total_items > MAX_STORED_AMOUNT || total_price > MAX_STORED_AMOUNT {
            return Err(TotalsOverflow);
        }

        self.lines.push(OrderLineDraft {
            uuid: OrderLineUuid::new(),
            position,
            product_uuid: product,
            quantity,
            unit_price,
            line_total,
        });
        self.total_items = total_items;
        self.total_price = total_price;

        Ok(())
    }
}
