use actix_web::{
    put,
    web::{Data, Json, Path, ReqData},
    HttpResponse,
};
use db_adapters::{user_adapter::UserAdapter, user_role_adapter::UserRoleAdapter};
use entities::user as user_entity;
use sea_orm::DbConn;
use use_cases::{
    users::{types::UserUpdateRequest, update::update_user},
    UseCaseError,
};

use crate::utils::{response_400, response_401, response_404, response_500};

#[derive(serde::Deserialize, Debug, serde::Serialize)]
struct PathParam {
    user_id: String,
}

#[tracing::instrument(name = "Updating a user", skip(db, user))]
#[put("/{user_id}")]
pub async fn update_user_endpoint(
    db: Data<DbConn>,
    user: Option<ReqData<user_entity::Model>>,
    req: Json<UserUpdateRequest>,
    path_param: Path<PathParam>,
) -> HttpResponse {
    match user {
        Some(_) => {
            if req.first_name.trim().is_empty() {
                return response_400("first_name is required.");
            }
            match update_user(
                path_param.into_inner().user_id,
                req.into_inner(),
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
