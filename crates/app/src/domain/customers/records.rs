//! Customer Records

use jiff::Timestamp;

use crate::uuids::TypedUuid;

/// Customer UUID
pub type CustomerUuid = TypedUuid<CustomerRecord>;

/// Customer Record
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    pub uuid: CustomerUuid,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl CustomerRecord {
    /// A customer can check out once address, city and phone are all present.
    pub fn is_checkout_ready(&self) -> bool {
        self.missing_checkout_fields().is_empty()
    }

    /// Names of the profile fields still blocking checkout.
    pub fn missing_checkout_fields(&self) -> Vec<&'static str> {
        [
            ("address", &self.address),
            ("city", &self.city),
            ("phone", &self.phone),
        ]
        .into_iter()
        .filter(|(_, value)| !is_present(value.as_deref()))
        .map(|(field, _)| field)
        .collect()
    }
}

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|value| !value.trim().is_empty())
}
