use common::{
    auth::{
        password,
        public_id::generate_public_id,
        tokens::{issue_token, TokenPurpose},
    },
    settings::types::Settings,
};
use db_adapters::{
    address_adapter::CreateAddressParams,
    user_adapter::{CreateUserParams, UserAdapter, UserMutation, UserQuery},
    CustomDbErr,
};
use entities::sea_orm_active_enums::RoleEnum;
use sea_orm::{DbErr, TransactionError};

use crate::{
    error_500,
    users::types::{IssuedToken, UserCreateRequest, UserCreated, UserVisible},
    UseCaseError,
};

const DUPLICATE_EMAIL_MESSAGE: &str = "A user with this email address already exists.";

#[tracing::instrument(
    name = "Creating a new user",
    skip(params, settings, user_adapter),
    fields(user_email = %params.email)
)]
pub async fn create_user<'a>(
    params: UserCreateRequest,
    settings: &Settings,
    user_adapter: UserAdapter<'a>,
) -> Result<UserCreated, UseCaseError> {
    if user_adapter
        .clone()
        .get_by_email(params.email.clone())
        .await
        .map_err(error_500)?
        .is_some()
    {
        return Err(UseCaseError::Conflict(DUPLICATE_EMAIL_MESSAGE.to_string()));
    }

    let public_user_id = generate_public_id();
    let hashed_password = password::hash(params.password.as_bytes()).map_err(error_500)?;
    let email_verification_token = match settings.email.no_verify {
        true => None,
        false => Some(
            issue_token(&public_user_id, TokenPurpose::EmailVerification, settings)
                .map_err(error_500)?,
        ),
    };

    let addresses = params
        .addresses
        .into_iter()
        .map(|address| CreateAddressParams {
            address_id: generate_public_id(),
            street_name: address.street_name,
            city: address.city,
            country: address.country,
            postal_code: address.postal_code,
            r#type: address.r#type,
        })
        .collect();

    let user = user_adapter
        .create(CreateUserParams {
            user_id: public_user_id,
            email: params.email,
            password: hashed_password,
            first_name: params.first_name,
            last_name: params.last_name,
            email_verification_status: email_verification_token.is_none(),
            email_verification_token: email_verification_token.clone(),
            role: RoleEnum::User,
            addresses,
        })
        .await
        .map_err(|e| match &e {
            TransactionError::Transaction(DbErr::Custom(message)) => {
                match CustomDbErr::from(message) {
                    CustomDbErr::Duplicate => {
                        UseCaseError::Conflict(DUPLICATE_EMAIL_MESSAGE.to_string())
                    }
                    _ => error_500(e),
                }
            }
            _ => error_500(e),
        })?;

    tracing::event!(target: "backend", tracing::Level::INFO, "New user was created.");
    let email_verification = email_verification_token.map(|token| IssuedToken::new(token, &user));
    Ok(UserCreated {
        user: UserVisible::new(user, vec![RoleEnum::User]),
        email_verification,
    })
}
