//! src/captcha/recaptcha.rs
use reqwest::{Client, StatusCode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum VerifyError {
    #[error("The challenge response was rejected ({})", .0.join(", "))]
    Rejected(Vec<String>),
    #[error("The verification service answered with {0}")]
    Status(StatusCode),
    #[error("Failed to talk to the verification service")]
    Transport(#[source] reqwest::Error),
}

impl VerifyError {
    /// Whether the user can fix this by solving the challenge again.
    pub fn is_rejection(&self) -> bool {
        matches!(self, VerifyError::Rejected(_) | VerifyError::Status(_))
    }
}

#[derive(Debug, Serialize)]
struct VerifyRequest<'a> {
    secret: &'a str,
    response: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    remoteip: Option<&'a str>,
}

#[derive(Debug, Deserialize)]
struct VerifyResponse {
    success: bool,
    #[serde(default, rename = "error-codes")]
    error_codes: Vec<String>,
}

#[derive(Debug)]
pub struct RecaptchaClient {
    http_client: Client,
    verify_url: String,
    secret: Secret<String>,
}

impl RecaptchaClient {
    pub fn new(verify_url: String, secret: Secret<String>) -> Self {
        Self {
            http_client: Client::new(),
            verify_url,
            secret,
        }
    }

    #[tracing::instrument(name = "Verifying a reCAPTCHA response", skip(self, token))]
    pub async fn verify(&self, token: &str, remote_ip: Option<&str>) -> Result<(), VerifyError> {
        let request = VerifyRequest {
            secret: self.secret.expose_secret(),
            response: token,
            remoteip: remote_ip,
        };

        let response = self
            .http_client
            .post(&self.verify_url)
            .form(&request)
            .send()
            .await
            .map_err(VerifyError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(VerifyError::Status(status));
        }

        let body: VerifyResponse = response.json().await.map_err(VerifyError::Transport)?;
        if body.success {
            Ok(())
        } else {
            Err(VerifyError::Rejected(body.error_codes))
        }
    }
}
