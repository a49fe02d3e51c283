use std::collections::HashMap;

use db_adapters::{
    user_adapter::{UserAdapter, UserLimit, UserOrder, UserQuery},
    user_role_adapter::{UserRoleAdapter, UserRoleFilter, UserRoleQuery},
    Order::Asc,
};

use crate::{
    error_500,
    users::types::{UserListQuery, UserVisible},
    UseCaseError,
};

pub const DEFAULT_PAGE_LIMIT: u64 = 25;
pub const MAX_PAGE_LIMIT: u64 = 100;

/// Pages are 1-based; page 0 is read as the first page.
pub async fn list_users<'a>(
    query: UserListQuery,
    user_adapter: UserAdapter<'a>,
    user_role_adapter: UserRoleAdapter<'a>,
) -> Result<Vec<UserVisible>, UseCaseError> {
    let limit = query.limit.unwrap_or(DEFAULT_PAGE_LIMIT);
    if !(1..=MAX_PAGE_LIMIT).contains(&limit) {
        return Err(UseCaseError::BadRequest(format!(
            "limit must be between 1 and {}.",
            MAX_PAGE_LIMIT
        )));
    }
    let offset = page_offset(query.page, limit);

    let users = user_adapter
        .order_by_created_at(Asc)
        .order_by_id(Asc)
        .offset(offset)
        .limit(limit)
        .get_all()
        .await
        .map_err(error_500)?;

    let mut roles_by_user = HashMap::new();
    for role in user_role_adapter
        .filter_in_users(&users)
        .get_all()
        .await
        .map_err(error_500)?
    {
        roles_by_user
            .entry(role.user_id)
            .or_insert_with(Vec::new)
            .push(role.role);
    }

    Ok(users
        .into_iter()
        .map(|user| {
            let roles = roles_by_user.remove(&user.id).unwrap_or_default();
            UserVisible::new(user, roles)
        })
        .collect())
}

fn page_offset(page: Option<u64>, limit: u64) -> u64 {
    page.unwrap_or(0).saturating_sub(1).saturating_mul(limit)
}
