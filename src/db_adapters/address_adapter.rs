use std::future::Future;

use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, Order, QueryFilter, QueryOrder, Select};

use entities::{
    address::{Column, Entity, Model},
    sea_orm_active_enums::AddressType,
    user,
};

#[derive(Clone)]
pub struct AddressAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> AddressAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait AddressFilter {
    fn filter_eq_user(self, user: &user::Model) -> Self;
}

impl AddressFilter for AddressAdapter<'_> {
    fn filter_eq_user(mut self, user: &user::Model) -> Self {
        self.query = self.query.filter(Column::UserId.eq(user.id));
        self
    }
}

pub trait AddressOrder {
    fn order_by_created_at(self, order: Order) -> Self;
}

impl AddressOrder for AddressAdapter<'_> {
    fn order_by_created_at(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::CreatedAt, order);
        self
    }
}

pub trait AddressQuery {
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
    fn get_by_address_id(
        self,
        address_id: String,
    ) -> impl Future<Output = Result<Option<Model>, DbErr>>;
}

impl AddressQuery for AddressAdapter<'_> {
    async fn get_all(self) -> Result<Vec<Model>, DbErr> {
        self.query.all(self.db).await
    }

    async fn get_by_address_id(self, address_id: String) -> Result<Option<Model>, DbErr> {
        self.query
            .filter(Column::AddressId.eq(address_id))
            .one(self.db)
            .await
    }
}

/// An address written together with its new owner.
#[derive(Debug, Clone)]
pub struct CreateAddressParams {
    pub address_id: String,
    pub street_name: String,
    pub city: String,
    pub country: String,
    pub postal_code: String,
    pub r#type: AddressType,
}
