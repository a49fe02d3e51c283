use actix_web::{
    get, post,
    web::{Data, Json, Query},
    HttpResponse,
};
use common::settings::types::Settings;
use db_adapters::user_adapter::UserAdapter;
use sea_orm::DbConn;
use use_cases::{
    users::{
        resend_verification::resend_verification_email,
        types::{EmailRequest, EmailVerificationQuery, OperationName, OperationStatus},
        verify_email::verify_email_token,
    },
    UseCaseError,
};

use crate::utils::{
    emails::{send_token_email, TokenEmail},
    response_400, response_404, response_500,
};

#[tracing::instrument(name = "Verifying a user's email", skip(db, query, settings))]
#[get("/email-verification")]
pub async fn verify_email_endpoint(
    db: Data<DbConn>,
    query: Query<EmailVerificationQuery>,
    settings: Data<Settings>,
) -> HttpResponse {
    match verify_email_token(query.into_inner().token, &settings, UserAdapter::init(&db)).await {
        Ok(_) => HttpResponse::Ok().json(OperationStatus::success(OperationName::VerifyEmail)),
        Err(e) => match &e {
            UseCaseError::BadRequest(message) => response_400(message),
            UseCaseError::NotFound(message) => response_404(message),
            _ => response_500(e),
        },
    }
}

#[tracing::instrument(name = "Resending a verification email", skip(db, settings))]
#[post("/email-verification/resend")]
pub async fn resend_verification_email_endpoint(
    db: Data<DbConn>,
    req: Json<EmailRequest>,
    settings: Data<Settings>,
) -> HttpResponse {
    match resend_verification_email(req.into_inner().email, &settings, UserAdapter::init(&db))
        .await
    {
        Ok(issued) => match send_token_email(TokenEmail::EmailVerification, issued, &settings) {
            Ok(_) => HttpResponse::Ok().json(OperationStatus::success(
                OperationName::ResendEmailVerification,
            )),
            Err(e) => response_500(e),
        },
        Err(e) => match &e {
            UseCaseError::NotFound(message) => response_404(message),
            _ => response_500(e),
        },
    }
}
