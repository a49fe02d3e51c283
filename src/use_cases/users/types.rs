use entities::{custom_methods::user::UserMailboxTrait, sea_orm_active_enums::RoleEnum, user};
use serde::{Deserialize, Serialize};

use crate::addresses::types::AddressCreateRequest;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct UserVisible {
    pub user_id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub email_verification_status: bool,
    pub roles: Vec<RoleEnum>,
}

impl UserVisible {
    pub fn new(user: user::Model, roles: Vec<RoleEnum>) -> Self {
        Self {
            user_id: user.user_id,
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            email_verification_status: user.email_verification_status,
            roles,
        }
    }
}

#[derive(Serialize, Deserialize, Clone)]
pub struct UserCreateRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub addresses: Vec<AddressCreateRequest>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UserUpdateRequest {
    pub first_name: String,
    pub last_name: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct UserListQuery {
    pub page: Option<u64>,
    pub limit: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EmailRequest {
    pub email: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct EmailVerificationQuery {
    pub token: String,
}

#[derive(Serialize, Deserialize, Clone)]
pub struct PasswordResetRequest {
    pub token: String,
    pub password: String,
}

/// A freshly issued single-purpose token and the recipient it must be sent to.
#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub recipient_name: Option<String>,
    pub email: String,
}

impl IssuedToken {
    pub(crate) fn new(token: String, user: &user::Model) -> Self {
        Self {
            token,
            recipient_name: user.display_name(),
            email: user.email.clone(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UserCreated {
    pub user: UserVisible,
    /// None when the account was created already verified.
    pub email_verification: Option<IssuedToken>,
}

/// What authentication needs to know about a principal.
#[derive(Clone)]
pub struct Credentials {
    pub user_id: String,
    pub email: String,
    pub password_hash: String,
    pub authorities: Vec<RoleEnum>,
    pub email_verified: bool,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct OperationStatus {
    pub operation_name: OperationName,
    pub operation_result: OperationResult,
}

impl OperationStatus {
    pub fn success(operation_name: OperationName) -> Self {
        Self {
            operation_name,
            operation_result: OperationResult::Success,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationName {
    Delete,
    VerifyEmail,
    ResendEmailVerification,
    RequestPasswordReset,
    PasswordReset,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OperationResult {
    Success,
}
