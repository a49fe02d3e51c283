pub mod password;
pub mod public_id;
pub mod tokens;
