use actix_web::{
    http::header::AUTHORIZATION,
    post,
    web::{Data, Json},
    HttpResponse,
};
use common::{redis::login_attempts_key, settings::types::Settings};
use db_adapters::{user_adapter::UserAdapter, user_role_adapter::UserRoleAdapter};
use deadpool_redis::{
    redis::{AsyncCommands, SetExpiry, SetOptions},
    Connection, Pool,
};
use sea_orm::DbConn;
use use_cases::{
    users::{login::login, types::LoginRequest},
    UseCaseError,
};

use crate::utils::{response_500, ErrorResponse};

pub const USER_ID_HEADER: &str = "UserID";

#[tracing::instrument(name = "Logging a user in", skip(db, redis_pool, req, settings), fields(user_email = %req.email))]
#[post("/login")]
pub async fn login_endpoint(
    db: Data<DbConn>,
    redis_pool: Data<Pool>,
    req: Json<LoginRequest>,
    settings: Data<Settings>,
) -> HttpResponse {
    let mut redis_con = match redis_pool.get().await {
        Ok(redis_con) => redis_con,
        Err(e) => return response_500(e),
    };
    let (login_request_count_key, login_request_count) =
        match validate_request_count(&mut redis_con, &req.email, &settings).await {
            Ok(count) => count,
            Err(_) => {
                return HttpResponse::Unauthorized().json(ErrorResponse {
                    error: "Your account is temporarily locked. Please try again later."
                        .to_string(),
                })
            }
        };

    match login(
        req.into_inner(),
        &settings,
        UserAdapter::init(&db),
        UserRoleAdapter::init(&db),
    )
    .await
    {
        Ok(res) => {
            tracing::event!(target: "backend", tracing::Level::INFO, "User logged in successfully.");
            if let Err(e) = redis_con.del::<String, u64>(login_request_count_key).await {
                tracing::event!(target: "redis", tracing::Level::WARN, "Error deleting login_request_count_key from Redis: {:#?}", e)
            };
            HttpResponse::Ok()
                .insert_header((AUTHORIZATION, format!("Bearer {}", res.token)))
                .insert_header((USER_ID_HEADER, res.user_id.clone()))
                .json(res)
        }
        Err(e) => match &e {
            UseCaseError::Unauthorized => {
                increment_login_request_count(
                    &mut redis_con,
                    login_request_count_key,
                    login_request_count,
                    &settings,
                )
                .await;
                HttpResponse::Unauthorized().json(ErrorResponse {
                    error: "Email or password is incorrect, or the email address has not been verified yet.".to_string(),
                })
            }
            _ => response_500(e),
        },
    }
}

async fn validate_request_count(
    redis_con: &mut Connection,
    email: &str,
    settings: &Settings,
) -> Result<(String, u64), String> {
    let login_request_count_key = login_attempts_key(email);
    let login_request_count = redis_con
        .get::<&str, Option<u64>>(&login_request_count_key)
        .await
        .unwrap_or_else(|e| {
            tracing::event!(target: "backend", tracing::Level::WARN, "Error getting login_request_count, defaults to 0: {}", e);
            None
        })
        .unwrap_or(0);
    if login_request_count >= settings.application.max_login_attempts {
        Err("Too many login requests".to_string())
    } else {
        Ok((login_request_count_key, login_request_count))
    }
}

async fn increment_login_request_count(
    redis_con: &mut Connection,
    login_request_count_key: String,
    login_request_count: u64,
    settings: &Settings,
) {
    if let Err(e) = redis_con
        .set_options::<String, u64, ()>(
            login_request_count_key,
            login_request_count + 1,
            SetOptions::default().with_expiration(SetExpiry::EX(
                settings.application.login_attempts_cool_time_seconds,
            )),
        )
        .await
    {
        tracing::event!(target: "redis", tracing::Level::WARN, "Error adding login_request_count_key to Redis: {:#?}", e)
    };
}
