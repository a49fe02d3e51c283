use db_adapters::{
    address_adapter::{AddressAdapter, AddressFilter, AddressQuery},
    user_adapter::{UserAdapter, UserQuery},
};

use crate::{addresses::types::AddressVisible, error_500, UseCaseError};

pub async fn get_address<'a>(
    user_id: String,
    address_id: String,
    user_adapter: UserAdapter<'a>,
    address_adapter: AddressAdapter<'a>,
) -> Result<AddressVisible, UseCaseError> {
    let not_found = || UseCaseError::NotFound("Address with this id was not found".to_string());

    let user = user_adapter
        .get_by_user_id(user_id)
        .await
        .map_err(error_500)?
        .ok_or_else(not_found)?;

    address_adapter
        .filter_eq_user(&user)
        .get_by_address_id(address_id)
        .await
        .map_err(error_500)?
        .map(AddressVisible::from)
        .ok_or_else(not_found)
}
