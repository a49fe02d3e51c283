use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use common::settings::types::Settings;
use db_adapters::user_adapter::UserAdapter;
use sea_orm::DbConn;
use use_cases::{
    users::{create::create_user, types::UserCreateRequest},
    UseCaseError,
};

use crate::utils::{
    emails::{send_token_email, TokenEmail},
    response_400, response_409, response_500,
};

#[tracing::instrument(name = "Creating a user", skip(db, req, settings), fields(user_email = %req.email))]
#[post("")]
pub async fn create_user_endpoint(
    db: Data<DbConn>,
    req: Json<UserCreateRequest>,
    settings: Data<Settings>,
) -> HttpResponse {
    if req.email.trim().is_empty() || req.password.is_empty() {
        return response_400("Email and password are required.");
    }

    match create_user(req.into_inner(), &settings, UserAdapter::init(&db)).await {
        Ok(res) => {
            if let Some(issued) = res.email_verification {
                if let Err(e) = send_token_email(TokenEmail::EmailVerification, issued, &settings)
                {
                    tracing::event!(target: "backend", tracing::Level::ERROR, "Verification email was not sent: {}", e);
                }
            }
            HttpResponse::Created().json(res.user)
        }
        Err(e) => match &e {
            UseCaseError::Conflict(message) => response_409(message),
            _ => response_500(e),
        },
    }
}
