//! Cart Records

use jiff::Timestamp;

use crate::{
    domain::{customers::records::CustomerUuid, products::records::ProductUuid},
    uuids::TypedUuid,
};

/// Cart UUID
pub type CartUuid = TypedUuid<CartRecord>;

/// Cart Record
#[derive(Debug, Clone, PartialEq)]
pub struct CartRecord {
    pub uuid: CartUuid,
    pub customer_uuid: CustomerUuid,
    pub total_items: u64,
    pub total_price: u64,
    pub version: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Cart Line Record
#[derive(Debug, Clone, PartialEq)]
pub struct CartLineRecord {
    pub product_uuid: ProductUuid,
    pub quantity: u32,
    pub unit_price: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CartLineRecord {
    /// `quantity * unit_price`, or `None` on overflow.
    pub fn line_total(&self) -> Option<u64> {
        self.unit_price.checked_mul(u64::from(self.quantity))
    }
}
