mod addresses;
mod middlewares;
mod users;
mod utils;

pub use users::user_routes;

pub use middlewares::auth as auth_middleware;
