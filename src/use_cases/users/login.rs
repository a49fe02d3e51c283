use common::{
    auth::{
        password::verify_password,
        tokens::{issue_token, TokenPurpose},
    },
    settings::types::Settings,
};
use db_adapters::{user_adapter::UserAdapter, user_role_adapter::UserRoleAdapter};

use crate::{
    error_500,
    users::{
        credentials::load_credentials,
        types::{LoginRequest, LoginResponse},
    },
    UseCaseError,
};

/// Unknown email, wrong password and unverified email all answer Unauthorized.
pub async fn login<'a>(
    params: LoginRequest,
    settings: &Settings,
    user_adapter: UserAdapter<'a>,
    user_role_adapter: UserRoleAdapter<'a>,
) -> Result<LoginResponse, UseCaseError> {
    let credentials = load_credentials(params.email, user_adapter, user_role_adapter).await?;

    if verify_password(&credentials.password_hash, params.password.as_bytes()).is_err() {
        return Err(UseCaseError::Unauthorized);
    }
    if !credentials.email_verified {
        return Err(UseCaseError::Unauthorized);
    }

    let token =
        issue_token(&credentials.user_id, TokenPurpose::Access, settings).map_err(error_500)?;
    Ok(LoginResponse {
        token,
        user_id: credentials.user_id,
    })
}
