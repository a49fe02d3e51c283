pub mod create;
pub mod credentials;
pub mod delete;
pub mod get;
pub mod list;
pub mod login;
pub mod password_reset;
pub mod resend_verification;
pub mod types;
pub mod update;
pub mod verify_email;

use db_adapters::user_role_adapter::{UserRoleAdapter, UserRoleFilter, UserRoleQuery};
use entities::user;

use crate::{error_500, users::types::UserVisible, UseCaseError};

pub(crate) async fn to_user_visible(
    user: user::Model,
    user_role_adapter: UserRoleAdapter<'_>,
) -> Result<UserVisible, UseCaseError> {
    let roles = user_role_adapter
        .filter_eq_user(&user)
        .get_roles()
        .await
        .map_err(error_500)?;
    Ok(UserVisible::new(user, roles))
}
