pub mod get;
pub mod list;
mod types;
