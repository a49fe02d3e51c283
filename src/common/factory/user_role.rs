use entities::{sea_orm_active_enums::RoleEnum, user_role};
use sea_orm::Set;
use uuid::Uuid;

pub fn user_role(user_id: Uuid, role: RoleEnum) -> user_role::ActiveModel {
    user_role::ActiveModel {
        id: Set(Uuid::now_v7()),
        user_id: Set(user_id),
        role: Set(role),
    }
}
