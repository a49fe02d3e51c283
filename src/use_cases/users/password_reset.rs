use common::{
    auth::{
        password,
        tokens::{issue_token, verify_token, TokenPurpose},
    },
    settings::types::Settings,
};
use db_adapters::{
    password_reset_token_adapter::{
        PasswordResetTokenAdapter, PasswordResetTokenMutation, PasswordResetTokenQuery,
    },
    user_adapter::{UserAdapter, UserQuery},
};
use sea_orm::{DbErr, TransactionError};

use crate::{
    error_500,
    users::types::{IssuedToken, PasswordResetRequest},
    UseCaseError,
};

const INVALID_TOKEN_MESSAGE: &str =
    "It appears that your password reset token has expired or has already been used.";

/// Replaces any earlier token of the user; the caller mails the returned one.
pub async fn request_password_reset<'a>(
    email: String,
    settings: &Settings,
    user_adapter: UserAdapter<'a>,
    password_reset_token_adapter: PasswordResetTokenAdapter<'a>,
) -> Result<IssuedToken, UseCaseError> {
    let user = match user_adapter.get_by_email(email).await.map_err(error_500)? {
        Some(user) => user,
        None => {
            return Err(UseCaseError::NotFound(
                "A user with this email does not exist.".to_string(),
            ))
        }
    };

    let token =
        issue_token(&user.user_id, TokenPurpose::PasswordReset, settings).map_err(error_500)?;
    password_reset_token_adapter
        .replace(&user, token.clone())
        .await
        .map_err(error_500)?;

    tracing::event!(target: "backend", tracing::Level::INFO, "Password reset token was issued.");
    Ok(IssuedToken::new(token, &user))
}

/// Tokens are single use: the reset deletes it in the same transaction.
pub async fn reset_password<'a>(
    params: PasswordResetRequest,
    settings: &Settings,
    user_adapter: UserAdapter<'a>,
    password_reset_token_adapter: PasswordResetTokenAdapter<'a>,
) -> Result<(), UseCaseError> {
    let invalid_token = || UseCaseError::BadRequest(INVALID_TOKEN_MESSAGE.to_string());

    let stored_token = password_reset_token_adapter
        .clone()
        .get_by_token(params.token.clone())
        .await
        .map_err(error_500)?
        .ok_or_else(invalid_token)?;
    let subject = verify_token(&params.token, TokenPurpose::PasswordReset, settings)
        .map_err(|_| invalid_token())?;
    let user = user_adapter
        .get_by_id(stored_token.user_id)
        .await
        .map_err(error_500)?
        .filter(|user| user.user_id == subject)
        .ok_or_else(invalid_token)?;

    let hashed_password = password::hash(params.password.as_bytes()).map_err(error_500)?;
    password_reset_token_adapter
        .redeem(stored_token, user, hashed_password)
        .await
        .map_err(|e| match e {
            TransactionError::Transaction(DbErr::RecordNotFound(_)) => invalid_token(),
            _ => error_500(e),
        })?;

    tracing::event!(target: "backend", tracing::Level::INFO, "User password was reset.");
    Ok(())
}
