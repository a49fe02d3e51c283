use std::future::Future;

use chrono::Utc;
use sea_orm::{
    sqlx::error::Error::Database, ActiveModelTrait, ColumnTrait, DbConn, DbErr, EntityTrait,
    IntoActiveModel, ModelTrait, Order, QueryFilter, QueryOrder, QuerySelect,
    RuntimeErr::SqlxError, Select, Set, TransactionError, TransactionTrait,
};
use uuid::Uuid;

use crate::{address_adapter::CreateAddressParams, CustomDbErr};
use entities::{
    address,
    sea_orm_active_enums::RoleEnum,
    user::{ActiveModel, Column, Entity, Model},
    user_role,
};

const EMAIL_UNIQUE_CONSTRAINT: &str = "user_email_key";

/// Emails are stored and looked up lowercased.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[derive(Clone)]
pub struct UserAdapter<'a> {
    pub db: &'a DbConn,
    pub query: Select<Entity>,
}

impl<'a> UserAdapter<'a> {
    pub fn init(db: &'a DbConn) -> Self {
        Self {
            db,
            query: Entity::find(),
        }
    }
}

pub trait UserFilter {
    fn filter_eq_email_verification_status(self, email_verification_status: bool) -> Self;
}

impl UserFilter for UserAdapter<'_> {
    fn filter_eq_email_verification_status(mut self, email_verification_status: bool) -> Self {
        self.query = self
            .query
            .filter(Column::EmailVerificationStatus.eq(email_verification_status));
        self
    }
}

pub trait UserOrder {
    fn order_by_created_at(self, order: Order) -> Self;
    fn order_by_id(self, order: Order) -> Self;
}

impl UserOrder for UserAdapter<'_> {
    fn order_by_created_at(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::CreatedAt, order);
        self
    }

    fn order_by_id(mut self, order: Order) -> Self {
        self.query = self.query.order_by(Column::Id, order);
        self
    }
}

pub trait UserLimit {
    fn offset(self, offset: u64) -> Self;
    fn limit(self, limit: u64) -> Self;
}

impl UserLimit for UserAdapter<'_> {
    fn offset(mut self, offset: u64) -> Self {
        self.query = QuerySelect::offset(self.query, offset);
        self
    }

    fn limit(mut self, limit: u64) -> Self {
        self.query = QuerySelect::limit(self.query, limit);
        self
    }
}

pub trait UserQuery {
    fn get_all(self) -> impl Future<Output = Result<Vec<Model>, DbErr>>;
    fn get_by_id(self, id: Uuid) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_by_user_id(self, user_id: String)
        -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_by_email(self, email: String) -> impl Future<Output = Result<Option<Model>, DbErr>>;
    fn get_by_email_verification_token(
        self,
        token: String,
    ) -> impl Future<Output = Result<Option<Model>, DbErr>>;
}

impl UserQuery for UserAdapter<'_> {
    async fn get_all(self) -> Result<Vec<Model>, DbErr> {
        self.query.all(self.db).await
    }

    async fn get_by_id(self, id: Uuid) -> Result<Option<Model>, DbErr> {
        self.query.filter(Column::Id.eq(id)).one(self.db).await
    }

    async fn get_by_user_id(self, user_id: String) -> Result<Option<Model>, DbErr> {
        self.query
            .filter(Column::UserId.eq(user_id))
            .one(self.db)
            .await
    }

    async fn get_by_email(self, email: String) -> Result<Option<Model>, DbErr> {
        self.query
            .filter(Column::Email.eq(normalize_email(&email)))
            .one(self.db)
            .await
    }

    async fn get_by_email_verification_token(self, token: String) -> Result<Option<Model>, DbErr> {
        self.query
            .filter(Column::EmailVerificationToken.eq(token))
            .one(self.db)
            .await
    }
}

#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub user_id: String,
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email_verification_token: Option<String>,
    pub email_verification_status: bool,
    pub role: RoleEnum,
    pub addresses: Vec<CreateAddressParams>,
}

#[derive(Debug, Clone)]
pub struct UpdateUserNamesParams {
    pub first_name: String,
    pub last_name: String,
}

pub trait UserMutation {
    fn create(
        self,
        params: CreateUserParams,
    ) -> impl Future<Output = Result<Model, TransactionError<DbErr>>>;
    fn update_names(
        self,
        user: Model,
        params: UpdateUserNamesParams,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn verify_email(self, user: Model) -> impl Future<Output = Result<Model, DbErr>>;
    fn update_email_verification_token(
        self,
        user: Model,
        token: String,
    ) -> impl Future<Output = Result<Model, DbErr>>;
    fn delete(self, user: Model) -> impl Future<Output = Result<(), DbErr>>;
}

impl UserMutation for UserAdapter<'_> {
    /// The user, its role and its addresses are written in one transaction.
    async fn create(self, params: CreateUserParams) -> Result<Model, TransactionError<DbErr>> {
        self.db
            .transaction::<_, Model, DbErr>(|txn| {
                Box::pin(async move {
                    let now = Utc::now();
                    let created_user = ActiveModel {
                        id: Set(Uuid::now_v7()),
                        user_id: Set(params.user_id),
                        email: Set(normalize_email(&params.email)),
                        password: Set(params.password),
                        first_name: Set(params.first_name),
                        last_name: Set(params.last_name),
                        email_verification_token: Set(params.email_verification_token),
                        email_verification_status: Set(params.email_verification_status),
                        created_at: Set(now.into()),
                        updated_at: Set(now.into()),
                    }
                    .insert(txn)
                    .await
                    .map_err(duplicate_email_as_custom)?;

                    user_role::ActiveModel {
                        id: Set(Uuid::now_v7()),
                        user_id: Set(created_user.id),
                        role: Set(params.role),
                    }
                    .insert(txn)
                    .await?;

                    for address in params.addresses {
                        address::ActiveModel {
                            id: Set(Uuid::now_v7()),
                            address_id: Set(address.address_id),
                            user_id: Set(created_user.id),
                            street_name: Set(address.street_name),
                            city: Set(address.city),
                            country: Set(address.country),
                            postal_code: Set(address.postal_code),
                            r#type: Set(address.r#type),
                            created_at: Set(Utc::now().into()),
                        }
                        .insert(txn)
                        .await?;
                    }

                    Ok(created_user)
                })
            })
            .await
    }

    async fn update_names(self, user: Model, params: UpdateUserNamesParams) -> Result<Model, DbErr> {
        let mut user = user.into_active_model();
        user.first_name = Set(params.first_name);
        user.last_name = Set(params.last_name);
        user.updated_at = Set(Utc::now().into());
        user.update(self.db).await
    }

    async fn verify_email(self, user: Model) -> Result<Model, DbErr> {
        let mut user = user.into_active_model();
        user.email_verification_status = Set(true);
        user.email_verification_token = Set(None);
        user.updated_at = Set(Utc::now().into());
        user.update(self.db).await
    }

    async fn update_email_verification_token(
        self,
        user: Model,
        token: String,
    ) -> Result<Model, DbErr> {
        let mut user = user.into_active_model();
        user.email_verification_token = Set(Some(token));
        user.updated_at = Set(Utc::now().into());
        user.update(self.db).await
    }

    async fn delete(self, user: Model) -> Result<(), DbErr> {
        user.delete(self.db).await.map(|_| ())
    }
}

fn duplicate_email_as_custom(e: DbErr) -> DbErr {
    match &e {
        DbErr::Query(SqlxError(Database(error))) | DbErr::Exec(SqlxError(Database(error))) => {
            match error.constraint() {
                Some(EMAIL_UNIQUE_CONSTRAINT) => DbErr::Custom(CustomDbErr::Duplicate.to_string()),
                _ => e,
            }
        }
        _ => e,
    }
}
