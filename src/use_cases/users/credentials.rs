use db_adapters::{
    user_adapter::{UserAdapter, UserQuery},
    user_role_adapter::{UserRoleAdapter, UserRoleFilter, UserRoleQuery},
};

use crate::{error_500, users::types::Credentials, UseCaseError};

pub async fn load_credentials<'a>(
    email: String,
    user_adapter: UserAdapter<'a>,
    user_role_adapter: UserRoleAdapter<'a>,
) -> Result<Credentials, UseCaseError> {
    let user = match user_adapter.get_by_email(email).await.map_err(error_500)? {
        Some(user) => user,
        None => {
            tracing::event!(target: "backend", tracing::Level::INFO, "Principal not found.");
            return Err(UseCaseError::Unauthorized);
        }
    };
    let authorities = user_role_adapter
        .filter_eq_user(&user)
        .get_roles()
        .await
        .map_err(error_500)?;

    Ok(Credentials {
        user_id: user.user_id,
        email: user.email,
        password_hash: user.password,
        authorities,
        email_verified: user.email_verification_status,
    })
}
