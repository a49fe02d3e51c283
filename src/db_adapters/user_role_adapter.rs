use std::future::Future;

use sea_orm::{ColumnTrait, DbConn, DbErr, EntityTrait, QueryFilter, QueryOrder, Select};

use entities::{
    sea_orm_active_enums::RoleEnum,
    user,
    user_role::{Column, Entity, Model},
};

#[derive(Clone)]
pub struct UserRoleAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> UserRoleAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait UserRoleFilter {
    fn filter_eq_user(self, user: &user::Model) -> Self;
    fn filter_in_users(self, users: &[user::Model]) -> Self;
}

impl UserRoleFilter for UserRoleAdapter<'_> {
    fn filter_eq_user(mut self, user: &user::Model) -> Self {
        self.query = self.query.filter(Column::UserId.eq(user.id));
        self
    }

    fn filter_in_users(mut self, users: &[user::Model]) -> Self {
        self.query = self
            .query
            .filter(Column::UserId.is_in(users.iter().map(|user| user.id)));
        self
    }
}

pub trait UserRoleQuery {
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
    fn get_roles(self) -> impl Future<Output = Result<Vec<RoleEnum>, DbErr>>;
}

impl UserRoleQuery for UserRoleAdapter<'_> {
    async fn get_all(self) -> Result<Vec<Model>, DbErr> {
        self.query.order_by_asc(Column::Role).all(self.db).await
    }

    async fn get_roles(self) -> Result<Vec<RoleEnum>, DbErr> {
        self.get_all()
            .await
            .map(|roles| roles.into_iter().map(|r| r.role).collect())
    }
}
