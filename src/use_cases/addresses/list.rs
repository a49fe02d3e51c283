use db_adapters::{
    address_adapter::{AddressAdapter, AddressFilter, AddressOrder, AddressQuery},
    user_adapter::{UserAdapter, UserQuery},
    Order::Asc,
};

use crate::{addresses::types::AddressVisible, error_500, UseCaseError};

/// An unknown user simply has no addresses.
pub async fn get_addresses<'a>(
    user_id: String,
    user_adapter: UserAdapter<'a>,
    address_adapter: AddressAdapter<'a>,
) -> Result<Vec<AddressVisible>, UseCaseError> {
    let user = match user_adapter.get_by_user_id(user_id).await.map_err(error_500)? {
        Some(user) => user,
        None => return Ok(vec![]),
    };

    address_adapter
        .filter_eq_user(&user)
        .order_by_created_at(Asc)
        .get_all()
        .await
        .map(|addresses| addresses.into_iter().map(AddressVisible::from).collect())
        .map_err(error_500)
}
