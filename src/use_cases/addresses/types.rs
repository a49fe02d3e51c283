use entities::{address, sea_orm_active_enums::AddressType};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct AddressVisible {
    pub address_id: String,
    pub street_name: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
    pub r#type: AddressType,
}

impl From<address::Model> for AddressVisible {
    fn from(value: address::Model) -> Self {
        Self {
            address_id: value.address_id,
            street_name: value.street_name,
            city: value.city,
            country: value.country,
            postal_code: value.postal_code,
            r#type: value.r#type,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct AddressCreateRequest {
    pub street_name: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
    pub r#type: AddressType,
}
