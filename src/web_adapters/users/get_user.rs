use actix_web::{
    get,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use db_adapters::{user_adapter::UserAdapter, user_role_adapter::UserRoleAdapter};
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{users::get::get_user_by_public_id, UseCaseError};

use crate::utils::{response_401, response_404, response_500};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    user_id: String,
}

#[tracing::instrument(name = "Getting a user", skip(db, user))]
#[get("/{user_id}")]
pub async fn get_user_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match user {
        Some(_) => {
            match get_user_by_public_id(
                path_param.into_inner().user_id,
                UserAdapter::init(&db),
                UserRoleAdapter::init(&db),
            )
            .await
            {
                Ok(res) => HttpResponse::Ok().json(res),
                Err(e) => match &e {
                    UseCaseError::NotFound(message) => response_404(message),
                    _ => response_500(e),
                },
            }
        }
        None => response_401(),
    }
}
