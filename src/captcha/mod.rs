//! src/captcha/mod.rs
mod recaptcha;
pub use recaptcha::{RecaptchaClient, VerifyError};

use crate::configuration::RecaptchaSettings;
use crate::domain::CaptchaToken;

#[derive(thiserror::Error, Debug)]
#[error("reCAPTCHA verification is required but no secret key is configured")]
pub struct MissingSecret;

/// Server side check of the challenge token.
#[derive(Debug)]
pub enum CaptchaVerifier {
    Recaptcha(RecaptchaClient),
    /// No secret configured: every token is accepted.
    Disabled,
}

impl CaptchaVerifier {
    pub fn from_settings(settings: &RecaptchaSettings) -> Result<Self, MissingSecret> {
        match settings.secret() {
            Some(secret) => Ok(Self::Recaptcha(RecaptchaClient::new(
                settings.verify_url.clone(),
                secret.clone(),
            ))),
            None if settings.allow_unverified => {
                tracing::warn!(
                    "No reCAPTCHA secret configured, contact submissions will not be verified"
                );
                Ok(Self::Disabled)
            }
            None => Err(MissingSecret),
        }
    }

    pub async fn verify(
        &self,
        token: &CaptchaToken,
        remote_ip: Option<&str>,
    ) -> Result<(), VerifyError> {
        match self {
            Self::Recaptcha(client) => client.verify(token.as_ref(), remote_ip).await,
            Self::Disabled => {
                tracing::debug!("Skipping reCAPTCHA verification");
                Ok(())
            }
        }
    }
}
