use db_adapters::{
    user_adapter::{UpdateUserNamesParams, UserAdapter, UserMutation, UserQuery},
    user_role_adapter::UserRoleAdapter,
};

use crate::{
    error_500,
    users::{
        to_user_visible,
        types::{UserUpdateRequest, UserVisible},
    },
    UseCaseError,
};

/// Only the names are writable; email, public id and roles stay as they are.
pub async fn update_user<'a>(
    user_id: String,
    params: UserUpdateRequest,
    user_adapter: UserAdapter<'a>,
    user_role_adapter: UserRoleAdapter<'a>,
) -> Result<UserVisible, UseCaseError> {
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

    let user = user_adapter
        .update_names(
            user,
            UpdateUserNamesParams {
                first_name: params.first_name,
                last_name: params.last_name,
            },
        )
        .await
        .map_err(error_500)?;
    to_user_visible(user, user_role_adapter).await
}
