use core::fmt;

use chrono::{DateTime, Duration, Utc};
use pasetors::{
    claims::{Claims, ClaimsValidationRules},
    keys::SymmetricKey,
    local,
    token::UntrustedToken,
    version4::V4,
    Local,
};
use rand::{rngs::OsRng, RngCore};

use crate::settings::types::Settings;

const PURPOSE_CLAIM: &str = "purpose";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenPurpose {
    Access,
    EmailVerification,
    PasswordReset,
}

impl TokenPurpose {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenPurpose::Access => "access",
            TokenPurpose::EmailVerification => "email_verification",
            TokenPurpose::PasswordReset => "password_reset",
        }
    }

    pub fn lifetime(&self, settings: &Settings) -> Duration {
        match self {
            TokenPurpose::Access => Duration::minutes(settings.secret.access_token_expiration),
            TokenPurpose::EmailVerification => {
                Duration::minutes(settings.secret.token_expiration)
            }
            TokenPurpose::PasswordReset => {
                Duration::minutes(settings.secret.password_reset_token_expiration)
            }
        }
    }
}

#[derive(Debug)]
pub enum TokenError {
    Paseto(pasetors::errors::Error),
    MissingSubject,
    WrongPurpose,
}

impl fmt::Display for TokenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenError::Paseto(e) => write!(f, "Invalid token: {}", e),
            TokenError::MissingSubject => write!(f, "Token has no subject"),
            TokenError::WrongPurpose => write!(f, "Token was issued for another purpose"),
        }
    }
}

impl From<pasetors::errors::Error> for TokenError {
    fn from(value: pasetors::errors::Error) -> Self {
        TokenError::Paseto(value)
    }
}

/// Issues a PASETO v4.local token whose subject is a public user id.
#[tracing::instrument(name = "Issue pasetors token", skip(settings))]
pub fn issue_token(
    subject: &str,
    purpose: TokenPurpose,
    settings: &Settings,
) -> Result<String, TokenError> {
    issue_token_expiring_at(subject, purpose, Utc::now() + purpose.lifetime(settings), settings)
}

pub fn issue_token_expiring_at(
    subject: &str,
    purpose: TokenPurpose,
    expires_at: DateTime<Utc>,
    settings: &Settings,
) -> Result<String, TokenError> {
    let token_identifier = {
        let mut buff = [0_u8; 16];
        OsRng.fill_bytes(&mut buff);
        hex::encode(buff)
    };

    let mut claims = Claims::new()?;
    claims.expiration(&expires_at.to_rfc3339())?;
    claims.subject(subject)?;
    claims.token_identifier(&token_identifier)?;
    claims.add_additional(PURPOSE_CLAIM, purpose.as_str())?;

    let sk = SymmetricKey::<V4>::from(settings.secret.secret_key.as_bytes())?;
    Ok(local::encrypt(
        &sk,
        &claims,
        None,
        Some(settings.secret.hmac_secret.as_bytes()),
    )?)
}

/// Returns the subject of a valid, unexpired token issued for `purpose`.
#[tracing::instrument(name = "Verify pasetors token", skip(token, settings))]
pub fn verify_token(
    token: &str,
    purpose: TokenPurpose,
    settings: &Settings,
) -> Result<String, TokenError> {
    let sk = SymmetricKey::<V4>::from(settings.secret.secret_key.as_bytes())?;
    let validation_rules = ClaimsValidationRules::new();
    let untrusted_token = UntrustedToken::<Local, V4>::try_from(token)?;
    let trusted_token = local::decrypt(
        &sk,
        &untrusted_token,
        &validation_rules,
        None,
        Some(settings.secret.hmac_secret.as_bytes()),
    )?;
    let claims = trusted_token
        .payload_claims()
        .ok_or(TokenError::MissingSubject)?;

    match claims.get_claim(PURPOSE_CLAIM).and_then(|p| p.as_str()) {
        Some(p) if p == purpose.as_str() => {}
        _ => return Err(TokenError::WrongPurpose),
    }

    claims
        .get_claim("sub")
        .and_then(|sub| sub.as_str())
        .map(|sub| sub.to_string())
        .ok_or(TokenError::MissingSubject)
}
