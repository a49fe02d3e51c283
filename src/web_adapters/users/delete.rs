use actix_web::{
    delete,
    web::{Data, Path, ReqData},
    HttpResponse,
};
use db_adapters::{user_adapter::UserAdapter, user_role_adapter::UserRoleAdapter};
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{
    users::{
        delete::delete_user,
        types::{OperationName, OperationStatus},
    },
    UseCaseError,
};

use crate::utils::{response_401, response_403, response_404, response_500};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    user_id: String,
}

#[tracing::instrument(name = "Deleting a user", skip(db, user))]
#[delete("/{user_id}")]
pub async fn delete_user_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match user {
        Some(user) => {
            match delete_user(
                user.into_inner(),
                path_param.into_inner().user_id,
                UserAdapter::init(&db),
                UserRoleAdapter::init(&db),
            )
            .await
            {
                Ok(_) => HttpResponse::Ok().json(OperationStatus::success(OperationName::Delete)),
                Err(e) => match &e {
                    UseCaseError::Forbidden => response_403(),
                    UseCaseError::NotFound(message) => response_404(message),
                    _ => response_500(e),
                },
            }
        }
        None => response_401(),
    }
}
