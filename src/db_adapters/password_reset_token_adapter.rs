use std::future::Future;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait, IntoActiveModel, QueryFilter,
    Select, Set, TransactionError, TransactionTrait,
};
use uuid::Uuid;

use entities::{
    password_reset_token::{ActiveModel, Column, Entity, Model},
    user,
};

#[derive(Clone)]
pub struct PasswordResetTokenAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> PasswordResetTokenAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait PasswordResetTokenQuery {
    fn get_by_token(self, token: String) -> impl Future<Output = Result<Option<Model>, DbErr>>;
}

impl PasswordResetTokenQuery for PasswordResetTokenAdapter<'_> {
    async fn get_by_token(self, token: String) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Token.eq(token)).one(self.db).await
    }
}

pub trait PasswordResetTokenMutation {
    fn replace(
        self,
        user: &user::Model,
        token: String,
    ) -> impl Future<Output = Result<Model, TransactionError<DbErr>>>;
    fn redeem(
        self,
        token: Model,
        user: user::Model,
        password: String,
    ) -> impl Future<Output = Result<user::Model, TransactionError<DbErr>>>;
}

impl PasswordResetTokenMutation for PasswordResetTokenAdapter<'_> {
    /// Drops any earlier token of `user` and stores `token` in its place.
    async fn replace(
        self,
        user: &user::Model,
        token: String,
    ) -> Result<Model, TransactionError<DbErr>> {
        let user_id = user.id;
        self.db
            .transaction::<_, Model, DbErr>(|txn| {
                Box::pin(async move {
                    Entity::delete_many()
                        .filter(Column::UserId.eq(user_id))
                        .exec(txn)
                        .await?;
                    ActiveModel {
                        id: Set(Uuid::now_v7()),
                        token: Set(token),
                        user_id: Set(user_id),
                        created_at: Set(Utc::now().into()),
                    }
                    .insert(txn)
                    .await
                })
            })
            .await
    }

    /// Consumes the token and stores the new password hash together.
    /// Fails with `RecordNotFound` if the token was consumed in the meantime.
    async fn redeem(
        self,
        token: Model,
        user: user::Model,
        password: String,
    ) -> Result<user::Model, TransactionError<DbErr>> {
        self.db
            .transaction::<_, user::Model, DbErr>(|txn| {
                Box::pin(async move {
                    let deleted = Entity::delete_by_id(token.id).exec(txn).await?;
                    if deleted.rows_affected == 0 {
                        return Err(DbErr::RecordNotFound(
                            "password_reset_token".to_string(),
                        ));
                    }

                    let mut user = user.into_active_model();
                    user.password = Set(password);
                    user.updated_at = Set(Utc::now().into());
                    user.update(txn).await
                })
            })
            .await
    }
}
