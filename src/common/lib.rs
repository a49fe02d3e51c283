#[cfg(feature = "auth")]
pub mod auth;
#[cfg(feature = "db")]
pub mod db;
#[cfg(feature = "factory")]
pub mod factory;
#[cfg(feature = "redis")]
pub mod redis;
#[cfg(feature = "settings")]
pub mod settings;
