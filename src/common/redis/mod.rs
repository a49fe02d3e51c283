use deadpool_redis::{Config, CreatePoolError, Pool, Runtime};

use crate::settings::types::Settings;

const LOGIN_ATTEMPTS_KEY_PREFIX: &str = "login_count_";

pub fn init_redis_pool(settings: &Settings) -> Result<Pool, CreatePoolError> {
    Config::from_url(&settings.redis.url).create_pool(Some(Runtime::Tokio1))
}

/// Emails are case-folded so "A@x.com" and "a@x.com" share one counter.
pub fn login_attempts_key(email: &str) -> String {
    format!("{}{}", LOGIN_ATTEMPTS_KEY_PREFIX, email.trim().to_lowercase())
}
