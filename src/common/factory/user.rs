use chrono::Utc;
use entities::user;
use sea_orm::Set;

use crate::auth::public_id::generate_public_id;

/// argon2id hash of "password".
pub const HASHED_PASSWORD: &str = "$argon2id$v=19$m=19456,t=2,p=1$r07vWFCaKrbNPrSgUrG/+Q$/2lBaeRWeox6ROMu6qAwOYmttdGXA3o4Uw2YHC/fvfY";

pub fn user() -> user::ActiveModel {
    let now = Utc::now();
    user::ActiveModel {
        id: Set(uuid::Uuid::now_v7()),
        user_id: Set(generate_public_id()),
        email: Set(format!("{}@test.com", uuid::Uuid::now_v7())),
        password: Set(HASHED_PASSWORD.to_string()),
        first_name: Set("Lynx".to_string()),
        last_name: Set("Levin".to_string()),
        email_verification_token: Set(None),
        email_verification_status: Set(true),
        created_at: Set(now.into()),
        updated_at: Set(now.into()),
    }
}

pub trait UserFactory {
    fn email(self, email: &str) -> user::ActiveModel;
    fn password(self, hashed_password: &str) -> user::ActiveModel;
    fn email_verification_status(self, email_verification_status: bool) -> user::ActiveModel;
    fn email_verification_token(self, token: Option<String>) -> user::ActiveModel;
}

impl UserFactory for user::ActiveModel {
    fn email(mut self, email: &str) -> user::ActiveModel {
        self.email = Set(email.to_string());
        self
    }

    fn password(mut self, hashed_password: &str) -> user::ActiveModel {
        self.password = Set(hashed_password.to_string());
        self
    }

    fn email_verification_status(mut self, email_verification_status: bool) -> user::ActiveModel {
        self.email_verification_status = Set(email_verification_status);
        self
    }

    fn email_verification_token(mut self, token: Option<String>) -> user::ActiveModel {
        self.email_verification_token = Set(token);
        self
    }
}
