use chrono::Utc;
use entities::{address, sea_orm_active_enums::AddressType};
use sea_orm::Set;
use uuid::Uuid;

use crate::auth::public_id::generate_public_id;

pub fn address(user_id: Uuid) -> address::ActiveModel {
    address::ActiveModel {
        id: Set(Uuid::now_v7()),
        address_id: Set(generate_public_id()),
        user_id: Set(user_id),
        street_name: Set("1-2-3 Shibuya".to_string()),
        city: Set("Tokyo".to_string()),
        country: Set("Japan".to_string()),
        postal_code: Set("150-0002".to_string()),
        r#type: Set(AddressType::Shipping),
        created_at: Set(Utc::now().into()),
    }
}

pub trait AddressFactory {
    fn r#type(self, address_type: AddressType) -> address::ActiveModel;
    fn city(self, city: &str) -> address::ActiveModel;
}

impl AddressFactory for address::ActiveModel {
    fn r#type(mut self, address_type: AddressType) -> address::ActiveModel {
        self.r#type = Set(address_type);
        self
    }

    fn city(mut self, city: &str) -> address::ActiveModel {
        self.city = Set(city.to_string());
        self
    }
}
