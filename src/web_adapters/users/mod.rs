mod create;
mod delete;
mod email_verification;
mod get_user;
mod list;
mod login;
mod password_reset;
mod update;

use actix_web::web::{scope, ServiceConfig};

use crate::addresses;

pub fn user_routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/users")
            .service(login::login_endpoint)
            .service(email_verification::verify_email_endpoint)
            .service(email_verification::resend_verification_email_endpoint)
            .service(password_reset::request_password_reset_endpoint)
            .service(password_reset::reset_password_endpoint)
            .service(create::create_user_endpoint)
            .service(list::list_users_endpoint)
            .service(addresses::list::list_addresses_endpoint)
            .service(addresses::get::get_address_endpoint)
            .service(get_user::get_user_endpoint)
            .service(update::update_user_endpoint)
            .service(delete::delete_user_endpoint),
    );
}
