use actix_web::{
    get,
    web::{Data, Query, ReqData},
    HttpResponse,
};
use db_adapters::{user_adapter::UserAdapter, user_role_adapter::UserRoleAdapter};
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{
    users::{list::list_users, types::UserListQuery},
    UseCaseError,
};

use crate::utils::{response_400, response_401, response_500};

#[tracing::instrument(name = "Listing users", skip(db, user))]
#[get("")]
pub async fn list_users_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    query: Query<UserListQuery>,
) -> HttpResponse {
    match user {
        Some(_) => match list_users(
            query.into_inner(),
            UserAdapter::init(&db),
            UserRoleAdapter::init(&db),
        )
        .await
        {
            Ok(res) => HttpResponse::Ok().json(res),
            Err(e) => match &e {
                UseCaseError::BadRequest(message) => response_400(message),
                _ => response_500(e),
            },
        },
        None => response_401(),
    }
}
