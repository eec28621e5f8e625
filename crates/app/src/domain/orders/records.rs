//! Order Records

use jiff::Timestamp;

use crate::{
    domain::{
        customers::records::CustomerUuid, orders::status::OrderStatus,
        products::records::ProductUuid,
    },
    uuids::TypedUuid,
};

/// Order UUID
pub type OrderUuid = TypedUuid<OrderRecord>;

/// Order Line UUID
pub type OrderLineUuid = TypedUuid<OrderLineRecord>;

/// Order Record
#[derive(Debug, Clone, PartialEq)]
pub struct OrderRecord {
    pub uuid: OrderUuid,
    pub customer_uuid: CustomerUuid,
    pub status: OrderStatus,
    pub total_items: u64,
    pub total_price: u64,
    pub version: u64,
    pub lines: Vec<OrderLineRecord>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Order Line Record
#[derive(Debug, Clone, PartialEq)]
pub struct OrderLineRecord {
    pub uuid: OrderLineUuid,
    pub position: u32,
    pub product_uuid: ProductUuid,
    pub quantity: u32,
    pub unit_price: u64,
    pub line_total: u64,
}
