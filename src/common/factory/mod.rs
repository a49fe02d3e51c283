mod address;
mod password_reset_token;
mod user;
mod user_role;

pub use address::*;
pub use password_reset_token::*;
pub use user::*;
pub use user_role::*;
