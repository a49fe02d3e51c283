use actix_web::{
    post,
    web::{Data, Json},
    HttpResponse,
};
use common::settings::types::Settings;
use db_adapters::{
    password_reset_token_adapter::PasswordResetTokenAdapter, user_adapter::UserAdapter,
};
use sea_orm::DbConn;
use use_cases::{
    users::{
        password_reset::{request_password_reset, reset_password},
        types::{EmailRequest, OperationName, OperationStatus, PasswordResetRequest},
    },
    UseCaseError,
};

use crate::utils::{
    emails::{send_token_email, TokenEmail},
    response_400, response_404, response_500,
};

#[tracing::instrument(name = "Requesting a password reset", skip(db, settings))]
#[post("/password-reset-request")]
pub async fn request_password_reset_endpoint(
    db: Data<DbConn>,
    req: Json<EmailRequest>,
    settings: Data<Settings>,
) -> HttpResponse {
    match request_password_reset(
        req.into_inner().email,
        &settings,
        UserAdapter::init(&db),
        PasswordResetTokenAdapter::init(&db),
    )
    .await
    {
        Ok(issued) => match send_token_email(TokenEmail::PasswordReset, issued, &settings) {
            Ok(_) => HttpResponse::Ok().json(OperationStatus::success(
                OperationName::RequestPasswordReset,
            )),
            Err(e) => response_500(e),
        },
        Err(e) => match &e {
            UseCaseError::NotFound(message) => response_404(message),
            _ => response_500(e),
        },
    }
}

#[tracing::instrument(name = "Resetting a user's password", skip(db, req, settings))]
#[post("/password-reset")]
pub async fn reset_password_endpoint(
    db: Data<DbConn>,
    req: Json<PasswordResetRequest>,
    settings: Data<Settings>,
) -> HttpResponse {
    if req.password.is_empty() {
        return response_400("password is required.");
    }

    match reset_password(
        req.into_inner(),
        &settings,
        UserAdapter::init(&db),
        PasswordResetTokenAdapter::init(&db),
    )
    .await
    {
        Ok(_) => HttpResponse::Ok().json(OperationStatus::success(OperationName::PasswordReset)),
        Err(e) => match &e {
            UseCaseError::BadRequest(message) => response_400(message),
            _ => response_500(e),
        },
    }
}
