//! Product Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
#[derive(Debug, Clone, PartialEq)]
pub struct ProductRecord {
    pub uuid: ProductUuid,
    pub price: u64,
    pub active: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub deleted_at: Option<Timestamp>,
}

/// Current price and availability of a catalog product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProductAvailability {
    pub uuid: ProductUuid,
    pub price: u64,
    pub available: bool,
}
