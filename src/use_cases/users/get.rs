use db_adapters::{
    user_adapter::{UserAdapter, UserQuery},
    user_role_adapter::UserRoleAdapter,
};

use crate::{error_500, users::to_user_visible, users::types::UserVisible, UseCaseError};

const NOT_FOUND_MESSAGE: &str = "User with this id was not found";

pub async fn get_user<'a>(
    email: String,
    user_adapter: UserAdapter<'a>,
    user_role_adapter: UserRoleAdapter<'a>,
) -> Result<UserVisible, UseCaseError> {
    match user_adapter.get_by_email(email).await.map_err(error_500)? {
        Some(user) => to_user_visible(user, user_role_adapter).await,
        None => Err(UseCaseError::NotFound(
            "User with this email was not found".to_string(),
        )),
    }
}

pub async fn get_user_by_public_id<'a>(
    user_id: String,
    user_adapter: UserAdapter<'a>,
    user_role_adapter: UserRoleAdapter<'a>,
) -> Result<UserVisible, UseCaseError> {
    match user_adapter.get_by_user_id(user_id).await.map_err(error_500)? {
        Some(user) => to_user_visible(user, user_role_adapter).await,
        None => Err(UseCaseError::NotFound(NOT_FOUND_MESSAGE.to_string())),
    }
}
