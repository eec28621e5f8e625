//! Customer Data

use crate::domain::customers::records::CustomerUuid;

/// New Customer Data
#[derive(Debug, Clone, PartialEq)]
pub struct NewCustomer {
    pub uuid: CustomerUuid,
    pub name: String,
}

/// Profile Update Data
///
/// Every field replaces the stored value; blank strings are stored as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileUpdate {
    pub address: Option<String>,
    pub city: Option<String>,
    pub phone: Option<String>,
}

impl ProfileUpdate {
    #[must_use]
    pub fn normalized(self) -> Self {
        Self {
            address: normalize(self.address),
            city: normalize(self.city),
            phone: normalize(self.phone),
        }
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
