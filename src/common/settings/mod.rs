use std::env;

use crate::settings::types::{
    ApplicationSettings, DatabaseSettings, EmailSettings, Environment, RedisSettings,
    SecretSettings, Settings,
};

pub mod types;

pub fn get_settings(env_file_name: &str) -> Result<Settings, String> {
    dotenvy::from_filename(env_file_name)
        .map_err(|e| format!("Failed to fetch env file: {}", e))?;

    match Environment::try_from(env::var("APP_ENVIRONMENT").unwrap_or_else(|_| "production".into()))
    {
        Ok(env) => match env {
            Environment::Testing => get_testing_settings(),
            Environment::Development => get_development_settings(),
            Environment::Production => get_production_settings(),
        },
        Err(e) => Err(format!("Failed to parse APP_ENVIRONMENT: {}", e)),
    }
}

pub fn get_test_settings() -> Settings {
    get_settings(".env.testing").expect("Error on getting settings.")
}

fn get_testing_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            protocol: "http".to_string(),
            host: "127.0.0.1".to_string(),
            base_url: "http://127.0.0.1".to_string(),
            frontend_url: "http://localhost:3000".to_string(),
            ..b.application
        },
        debug: true,
        email: EmailSettings {
            no_verify: true,
            ..b.email
        },
        ..b
    })
}

fn get_development_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            protocol: "http".to_string(),
            host: "127.0.0.1".to_string(),
            base_url: "http://127.0.0.1".to_string(),
            frontend_url: "https://localhost:3000".to_string(),
            ..b.application
        },
        debug: true,
        ..b
    })
}

fn get_production_settings() -> Result<Settings, String> {
    let b = Settings::base_settings();
    merge_env(Settings {
        application: ApplicationSettings {
            protocol: "https".to_string(),
            host: "0.0.0.0".to_string(),
            ..b.application
        },
        debug: false,
        ..b
    })
}

fn merge_env(s: Settings) -> Result<Settings, String> {
    Ok(Settings {
        application: ApplicationSettings {
            port: get_optional_env_var("APP_APPLICATION__PORT", s.application.port)?,
            base_url: env::var("APP_APPLICATION__BASE_URL").unwrap_or(s.application.base_url),
            frontend_url: env::var("APP_APPLICATION__FRONTEND_URL")
                .unwrap_or(s.application.frontend_url),
            max_login_attempts: get_optional_env_var(
                "MAX_LOGIN_ATTEMPTS",
                s.application.max_login_attempts,
            )?,
            login_attempts_cool_time_seconds: get_optional_env_var(
                "LOGIN_ATTEMPTS_COOL_TIME_SECONDS",
                s.application.login_attempts_cool_time_seconds,
            )?,
            ..s.application
        },
        database: DatabaseSettings {
            url: get_env_var("DATABASE_URL")?,
        },
        debug: match env::var("APP_DEBUG") {
            Ok(debug) => &debug == "true",
            Err(_) => s.debug,
        },
        redis: RedisSettings {
            url: get_env_var("REDIS_URL")?,
        },
        secret: SecretSettings {
            secret_key: get_env_var("APP_SECRET__SECRET_KEY")?,
            hmac_secret: get_env_var("APP_SECRET__HMAC_SECRET")?,
            token_expiration: get_optional_env_var(
                "APP_SECRET__TOKEN_EXPIRATION",
                s.secret.token_expiration,
            )?,
            password_reset_token_expiration: get_optional_env_var(
                "APP_SECRET__PASSWORD_RESET_TOKEN_EXPIRATION",
                s.secret.password_reset_token_expiration,
            )?,
            access_token_expiration: get_optional_env_var(
                "APP_SECRET__ACCESS_TOKEN_EXPIRATION",
                s.secret.access_token_expiration,
            )?,
        },
        email: EmailSettings {
            no_verify: match env::var("APP_EMAIL__NO_VERIFY") {
                Ok(no_verify) => &no_verify == "true",
                Err(_) => s.email.no_verify,
            },
            host: get_env_var("APP_EMAIL__HOST")?,
            host_user: get_env_var("APP_EMAIL__HOST_USER")?,
            host_user_password: get_env_var("APP_EMAIL__HOST_USER_PASSWORD")?,
            sender: get_env_var("APP_EMAIL__SENDER")?,
        },
    })
}

fn get_env_var(key: &str) -> Result<String, String> {
    env::var(key).map_err(|e| format!("{}: {}", key, e))
}

fn get_optional_env_var<T>(key: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(key) {
        Ok(value) => value
            .parse::<T>()
            .map_err(|e| format!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}
