//! Cart Models

use jiff::Timestamp;

use crate::{
    database::MAX_STORED_AMOUNT,
    domain::{
        carts::records::{CartLineRecord, CartRecord},
        customers::records::CustomerUuid,
    },
};

/// A customer's cart as seen by callers.
///
/// Customers who have never added anything get an empty cart at version 0.
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub customer_uuid: CustomerUuid,
    pub lines: Vec<CartLineRecord>,
    pub total_items: u64,
    pub total_price: u64,
    pub version: u64,
    pub updated_at: Option<Timestamp>,
}

impl Cart {
    #[must_use]
    pub fn empty(customer: CustomerUuid) -> Self {
        Self {
            customer_uuid: customer,
            lines: Vec::new(),
            total_items: 0,
            total_price: 0,
            version: 0,
            updated_at: None,
        }
    }

    #[must_use]
    pub fn from_record(record: CartRecord, lines: Vec<CartLineRecord>) -> Self {
        Self {
            customer_uuid: record.customer_uuid,
            lines,
            total_items: record.total_items,
            total_price: record.total_price,
            version: record.version,
            updated_at: Some(record.updated_at),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Item count and price summed over a set of cart lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CartTotals {
    pub total_items: u64,
    pub total_price: u64,
}

impl CartTotals {
    /// Sum the lines, returning `None` if either total overflows or does not
    /// fit in a `BIGINT` column.
    pub fn from_lines(lines: &[CartLineRecord]) -> Option<Self> {
        let totals = lines.iter().try_fold(Self::default(), |totals, line| {
            Some(Self {
                total_items: totals.total_items.checked_add(u64::from(line.quantity))?,
                total_price: totals.total_price.checked_add(line.line_total()?)?,
            })
        })?;

        (totals.total_items <= MAX_STORED_AMOUNT && totals.total_price <= MAX_STORED_AMOUNT)
            .then_some(totals)
    }
}
