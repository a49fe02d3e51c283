use db_adapters::{
    user_adapter::{UserAdapter, UserMutation, UserQuery},
    user_role_adapter::{UserRoleAdapter, UserRoleFilter, UserRoleQuery},
};
use entities::{sea_orm_active_enums::RoleEnum, user};

use crate::{error_500, UseCaseError};

/// Admins may delete anyone, everybody else only themselves.
pub async fn delete_user<'a>(
    principal: user::Model,
    user_id: String,
    user_adapter: UserAdapter<'a>,
    user_role_adapter: UserRoleAdapter<'a>,
) -> Result<(), UseCaseError> {
    if principal.user_id != user_id {
        let roles = user_role_adapter
            .filter_eq_user(&principal)
            .get_roles()
            .await
            .map_err(error_500)?;
        if !roles.contains(&RoleEnum::Admin) {
            return Err(UseCaseError::Forbidden);
        }
    }

    let user = match user_adapter
        .clone()
        .get_by_user_id(user_id)
        .await
        .map_err(error_500)?
    {
        Some(user) => user,
        None => {
            return Err(UseCaseError::NotFound(
                "User with this id was not found".to_string(),
            ))
        }
    };

    user_adapter.delete(user).await.map_err(error_500)?;
    tracing::event!(target: "backend", tracing::Level::INFO, "User was deleted.");
    Ok(())
}
