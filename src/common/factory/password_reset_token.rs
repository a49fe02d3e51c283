use chrono::Utc;
use entities::password_reset_token;
use sea_orm::Set;
use uuid::Uuid;

pub fn password_reset_token(user_id: Uuid, token: &str) -> password_reset_token::ActiveModel {
    password_reset_token::ActiveModel {
        id: Set(Uuid::now_v7()),
        token: Set(token.to_string()),
        user_id: Set(user_id),
        created_at: Set(Utc::now().into()),
    }
}
