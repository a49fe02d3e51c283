use common::{
    auth::tokens::{verify_token, TokenPurpose},
    settings::types::Settings,
};
use db_adapters::user_adapter::{UserAdapter, UserMutation, UserQuery};

use crate::{error_500, UseCaseError};

/// The token must be the one stored on the user and still be valid.
pub async fn verify_email_token<'a>(
    token: String,
    settings: &Settings,
    user_adapter: UserAdapter<'a>,
) -> Result<(), UseCaseError> {
    let user = match user_adapter
        .clone()
        .get_by_email_verification_token(token.clone())
        .await
        .map_err(error_500)?
    {
        Some(user) => user,
        None => {
            return Err(UseCaseError::NotFound(
                "This verification token is unknown or has already been used.".to_string(),
            ))
        }
    };

    match verify_token(&token, TokenPurpose::EmailVerification, settings) {
        Ok(subject) if subject == user.user_id => {}
        _ => {
            return Err(UseCaseError::BadRequest(
                "This verification token has expired. Please request a new one.".to_string(),
            ))
        }
    }

    user_adapter.verify_email(user).await.map_err(error_500)?;
    tracing::event!(target: "backend", tracing::Level::INFO, "User email was verified.");
    Ok(())
}
