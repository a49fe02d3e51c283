use common::{
    auth::tokens::{issue_token, TokenPurpose},
    settings::types::Settings,
};
use db_adapters::user_adapter::{UserAdapter, UserFilter, UserMutation, UserQuery};

use crate::{error_500, users::types::IssuedToken, UseCaseError};

pub async fn resend_verification_email<'a>(
    email: String,
    settings: &Settings,
    user_adapter: UserAdapter<'a>,
) -> Result<IssuedToken, UseCaseError> {
    let user = match user_adapter
        .clone()
        .filter_eq_email_verification_status(false)
        .get_by_email(email)
        .await
        .map_err(error_500)?
    {
        Some(user) => user,
        None => {
            return Err(UseCaseError::NotFound(
                "User with this email was not found. This happens if you have already verified this user.".to_string(),
            ))
        }
    };

    let token = issue_token(&user.user_id, TokenPurpose::EmailVerification, settings)
        .map_err(error_500)?;
    let user = user_adapter
        .update_email_verification_token(user, token.clone())
        .await
        .map_err(error_500)?;
    Ok(IssuedToken::new(token, &user))
}
