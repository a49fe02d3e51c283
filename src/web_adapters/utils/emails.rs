use common::settings::types::Settings;
use lettre::{
    message::{header::ContentType, Mailbox, MultiPart, SinglePart},
    transport::smtp::{
        authentication::{Credentials, Mechanism},
        PoolConfig,
    },
    Address, Message, SmtpTransport, Transport,
};
use minijinja::Environment;
use once_cell::sync::Lazy;
use use_cases::users::types::IssuedToken;

use crate::utils::api_url;

const VERIFICATION_EMAIL_TEMPLATE: &str = "verification_email.html";
const PASSWORD_RESET_EMAIL_TEMPLATE: &str = "password_reset_email.html";

static ENV: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    for (name, source) in [
        (
            VERIFICATION_EMAIL_TEMPLATE,
            include_str!("../templates/verification_email.html"),
        ),
        (
            PASSWORD_RESET_EMAIL_TEMPLATE,
            include_str!("../templates/password_reset_email.html"),
        ),
    ] {
        if let Err(e) = env.add_template(name, source) {
            tracing::event!(target: "backend", tracing::Level::ERROR, "Failed to load e-mail template {}: {:#?}", name, e);
        }
    }
    env
});

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenEmail {
    EmailVerification,
    PasswordReset,
}

impl TokenEmail {
    fn subject(&self) -> &'static str {
        match self {
            TokenEmail::EmailVerification => "Let's get you verified",
            TokenEmail::PasswordReset => "Password Reset Instructions",
        }
    }

    fn template_name(&self) -> &'static str {
        match self {
            TokenEmail::EmailVerification => VERIFICATION_EMAIL_TEMPLATE,
            TokenEmail::PasswordReset => PASSWORD_RESET_EMAIL_TEMPLATE,
        }
    }

    fn expiration_minutes(&self, settings: &Settings) -> i64 {
        match self {
            TokenEmail::EmailVerification => settings.secret.token_expiration,
            TokenEmail::PasswordReset => settings.secret.password_reset_token_expiration,
        }
    }

    /// Verification is a plain GET on the API; resetting needs a form on the frontend.
    fn link(&self, token: &str, settings: &Settings) -> String {
        match self {
            TokenEmail::EmailVerification => format!(
                "{}/users/email-verification?token={}",
                api_url(settings),
                token
            ),
            TokenEmail::PasswordReset => format!(
                "{}/password-reset?token={}",
                settings.application.frontend_url, token
            ),
        }
    }
}

/// Renders the mail for `issued` and hands it to a blocking task.
/// Delivery failures are only logged.
#[tracing::instrument(
    name = "Sending a token e-mail",
    skip(issued, settings),
    fields(recipient = %issued.email)
)]
pub fn send_token_email(
    kind: TokenEmail,
    issued: IssuedToken,
    settings: &Settings,
) -> Result<(), String> {
    let title = format!("Accounts - {}", kind.subject());
    let link = kind.link(&issued.token, settings);
    let expiration_minutes = kind.expiration_minutes(settings);
    let exact_time = (chrono::Local::now() + chrono::Duration::minutes(expiration_minutes))
        .format("%A %B %d, %Y at %r")
        .to_string();

    let html_text = ENV
        .get_template(kind.template_name())
        .and_then(|template| {
            template.render(minijinja::context! {
                title => &title,
                link => &link,
                domain => &settings.application.frontend_url,
                expiration_time => expiration_minutes,
                exact_time => &exact_time,
            })
        })
        .map_err(|e| format!("Failed to render {}: {}", kind.template_name(), e))?;
    let text = format!(
        "{}\n\nOpen the link below within {} minutes.\n{}\n",
        title, expiration_minutes, link
    );

    if settings.email.no_verify {
        tracing::event!(target: "backend", tracing::Level::INFO, "E-mail delivery is disabled, skipped sending.");
        return Ok(());
    }

    let message = build_message(
        recipient(&issued)?,
        kind.subject(),
        html_text,
        text,
        settings,
    )?;
    let sender = build_transport(settings)?;
    actix_web::rt::task::spawn_blocking(move || match sender.send(&message) {
        Ok(_) => {
            tracing::event!(target: "backend", tracing::Level::INFO, "Email successfully sent!");
        }
        Err(e) => {
            tracing::event!(target: "backend", tracing::Level::ERROR, "Could not send email: {:#?}", e);
        }
    });
    Ok(())
}

/// The display name is handed to lettre as is, so it gets quoted on output.
fn recipient(issued: &IssuedToken) -> Result<Mailbox, String> {
    let email = issued
        .email
        .parse::<Address>()
        .map_err(|e| format!("Invalid recipient address: {}", e))?;
    Ok(Mailbox::new(issued.recipient_name.clone(), email))
}

fn build_message(
    to: Mailbox,
    subject: &str,
    html_content: String,
    text_content: String,
    settings: &Settings,
) -> Result<Message, String> {
    Message::builder()
        .from(
            settings
                .email
                .sender
                .parse()
                .map_err(|e| format!("Failed to get sender mailbox setting: {}", e))?,
        )
        .to(to)
        .subject(subject)
        .multipart(
            MultiPart::alternative()
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_PLAIN)
                        .body(text_content),
                )
                .singlepart(
                    SinglePart::builder()
                        .header(ContentType::TEXT_HTML)
                        .body(html_content),
                ),
        )
        .map_err(|e| format!("Failed to build email: {}", e))
}

fn build_transport(settings: &Settings) -> Result<SmtpTransport, String> {
    let credentials = Credentials::new(
        settings.email.host_user.clone(),
        settings.email.host_user_password.clone(),
    );
    Ok(SmtpTransport::starttls_relay(&settings.email.host)
        .map_err(|e| format!("Failed to build SMTP transport: {}", e))?
        .credentials(credentials)
        .authentication(vec![Mechanism::Plain])
        .pool_config(PoolConfig::new().max_size(20))
        .build())
}
