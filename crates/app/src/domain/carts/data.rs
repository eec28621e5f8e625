//! Cart Data

use crate::domain::products::records::ProductUuid;

/// Quantity of a product to add to the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewCartLine {
    pub product_uuid: ProductUuid,
    pub quantity: i32,
}

/// Replacement quantity for an existing line. Zero or less removes the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartLineUpdate {
    pub quantity: i32,
}
