//! src/client/api.rs
use crate::domain::{ContactRequest, FieldErrors};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitAccepted {
    pub message: String,
    pub id: Uuid,
}

/// Anything but a successful submission, including transport failures.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitRejected {
    pub status: Option<StatusCode>,
    pub message: Option<String>,
    pub errors: FieldErrors,
}

#[derive(Debug, Deserialize)]
struct ContactResponse {
    #[serde(default)]
    success: bool,
    message: Option<String>,
    id: Option<Uuid>,
    #[serde(default)]
    errors: FieldErrors,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RecaptchaConfig {
    site_key: Option<String>,
}

/// HTTP client for the contact endpoints.
#[derive(Debug, Clone)]
pub struct ContactApi {
    http_client: Client,
    base_url: String,
}

impl ContactApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    #[tracing::instrument(name = "Posting a contact request", skip(self, request))]
    pub async fn submit(&self, request: &ContactRequest) -> Result<SubmitAccepted, SubmitRejected> {
        let response = self
            .http_client
            .post(format!("{}/api/contact", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error.cause_chain = ?e, "Failed to reach the contact endpoint");
                SubmitRejected::default()
            })?;

        let status = response.status();
        let body = response.json::<ContactResponse>().await.ok();

        match body {
            Some(ContactResponse {
                success: true,
                message: Some(message),
                id: Some(id),
                ..
            }) if status.is_success() => Ok(SubmitAccepted { message, id }),
            Some(body) => Err(SubmitRejected {
                status: Some(status),
                message: body.message,
                errors: body.errors,
            }),
            None => Err(SubmitRejected {
                status: Some(status),
                ..Default::default()
            }),
        }
    }

    pub async fn recaptcha_site_key(&self) -> Result<Option<String>, reqwest::Error> {
        let config: RecaptchaConfig = self
            .http_client
            .get(format!("{}/api/config/recaptcha", self.base_url))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(config.site_key.filter(|key| !key.trim().is_empty()))
    }
}
