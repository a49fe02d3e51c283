use serde::Deserialize;

#[derive(Deserialize, Clone, Default, Debug)]
pub struct Settings {
    pub application: ApplicationSettings,
    pub database: DatabaseSettings,
    pub debug: bool,
    pub redis: RedisSettings,
    pub secret: SecretSettings,
    pub email: EmailSettings,
}

impl Settings {
    pub fn base_settings() -> Self {
        Self {
            application: ApplicationSettings {
                port: 5000,
                max_log_files: 14,
                max_login_attempts: 5,
                login_attempts_cool_time_seconds: 3600,
                ..Default::default()
            },
            secret: SecretSettings {
                token_expiration: 30,
                password_reset_token_expiration: 60,
                access_token_expiration: 60 * 24 * 10,
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
    pub base_url: String,
    pub frontend_url: String,
    pub protocol: String,
    pub max_log_files: usize,
    pub max_login_attempts: u64,
    pub login_attempts_cool_time_seconds: u64,
}

#[derive(Deserialize, Clone, Default, Debug)]
pub struct DatabaseSettings {
    pub url: String,
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct RedisSettings {
    pub url: String,
}

/// Expirations are in minutes.
#[derive(Deserialize, Clone, Default)]
pub struct SecretSettings {
    /// 32 bytes, used as the PASETO v4.local key.
    pub secret_key: String,
    /// Implicit assertion bound into every token.
    pub hmac_secret: String,
    pub token_expiration: i64,
    pub password_reset_token_expiration: i64,
    pub access_token_expiration: i64,
}

impl std::fmt::Debug for SecretSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SecretSettings")
            .field("secret_key", &"[redacted]")
            .field("hmac_secret", &"[redacted]")
            .field("token_expiration", &self.token_expiration)
            .field(
                "password_reset_token_expiration",
                &self.password_reset_token_expiration,
            )
            .field("access_token_expiration", &self.access_token_expiration)
            .finish()
    }
}

#[derive(Deserialize, Clone, Default)]
pub struct EmailSettings {
    pub no_verify: bool,
    pub host: String,
    pub host_user: String,
    pub host_user_password: String,
    pub sender: String,
}

impl std::fmt::Debug for EmailSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmailSettings")
            .field("no_verify", &self.no_verify)
            .field("host", &self.host)
            .field("host_user", &self.host_user)
            .field("sender", &self.sender)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, PartialEq)]
pub enum Environment {
    Testing,
    Development,
    Production,
}

impl TryFrom<String> for Environment {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.to_lowercase().as_str() {
            "testing" => Ok(Self::Testing),
            "development" => Ok(Self::Development),
            "production" => Ok(Self::Production),
            other => Err(format!("{} is not a supported environment.", other)),
        }
    }
}
