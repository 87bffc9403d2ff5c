//! src/routes/contact.rs
use crate::captcha::{CaptchaVerifier, VerifyError};
use crate::domain::{ContactRequest, ContactSubmission, FieldErrors};
use crate::routes::error_chain_fmt;
use crate::storage::{ContactStore, StoreError};
use actix_web::error::{InternalError, JsonPayloadError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;
use uuid::Uuid;

pub const CONFIRMATION_MESSAGE: &str =
    "Thank you! Your message has been sent successfully. We'll get back to you within 24 hours.";
pub const INVALID_FORM_MESSAGE: &str = "Please check your form data and try again.";
pub const VERIFICATION_FAILED_MESSAGE: &str = "reCAPTCHA verification failed. Please try again.";
pub const GENERIC_FAILURE_MESSAGE: &str =
    "Something went wrong. Please try again or contact us directly.";

#[derive(thiserror::Error)]
pub enum ContactError {
    #[error("Invalid contact request")]
    ValidationError(#[source] FieldErrors),
    #[error("reCAPTCHA verification failed")]
    VerificationError(#[source] VerifyError),
    #[error("Failed to store the contact request")]
    PersistenceError(#[source] StoreError),
    #[error(transparent)]
    UnexpectedError(#[from] anyhow::Error),
}

impl std::fmt::Debug for ContactError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

#[derive(Serialize)]
struct ContactResponse<'a> {
    success: bool,
    message: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<Uuid>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a FieldErrors>,
}

impl<'a> ContactResponse<'a> {
    fn failure(message: &'a str) -> Self {
        Self {
            success: false,
            message,
            id: None,
            errors: None,
        }
    }
}

impl ResponseError for ContactError {
    fn status_code(&self) -> StatusCode {
        match self {
            ContactError::ValidationError(_) | ContactError::VerificationError(_) => {
                StatusCode::BAD_REQUEST
            }
            ContactError::PersistenceError(_) | ContactError::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ContactError::ValidationError(errors) => ContactResponse {
                errors: Some(errors),
                ..ContactResponse::failure(INVALID_FORM_MESSAGE)
            },
            ContactError::VerificationError(_) => {
                ContactResponse::failure(VERIFICATION_FAILED_MESSAGE)
            }
            ContactError::PersistenceError(_) | ContactError::UnexpectedError(_) => {
                tracing::error!(error.cause_chain = ?self, "Contact form error");
                ContactResponse::failure(GENERIC_FAILURE_MESSAGE)
            }
        };

        HttpResponse::build(self.status_code()).json(body)
    }
}

/// Answers unparseable bodies with the same envelope as field errors.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let mut errors = FieldErrors::default();
    errors.push("body", &err);

    let response = HttpResponse::BadRequest().json(ContactResponse {
        errors: Some(&errors),
        ..ContactResponse::failure(INVALID_FORM_MESSAGE)
    });

    InternalError::from_response(err, response).into()
}

#[tracing::instrument(
    name = "Submitting a contact request",
    skip(payload, req, store, verifier),
    fields(
        request_id = %Uuid::new_v4(),
        contact_email = tracing::field::Empty,
    )
)]
pub async fn submit_contact(
    payload: web::Json<ContactRequest>,
    req: HttpRequest,
    store: web::Data<dyn ContactStore>,
    verifier: web::Data<CaptchaVerifier>,
) -> Result<HttpResponse, ContactError> {
    let submission =
        ContactSubmission::try_from(payload.into_inner()).map_err(ContactError::ValidationError)?;
    tracing::Span::current().record(
        "contact_email",
        &tracing::field::display(&submission.contact.email),
    );

    let remote_ip = req
        .connection_info()
        .realip_remote_addr()
        .map(|addr| addr.to_string());

    match verifier
        .verify(&submission.recaptcha, remote_ip.as_deref())
        .await
    {
        Ok(()) => {}
        Err(e) if e.is_rejection() => return Err(ContactError::VerificationError(e)),
        Err(e) => {
            return Err(ContactError::UnexpectedError(
                anyhow::Error::new(e).context("Failed to verify the reCAPTCHA response"),
            ))
        }
    }

    // The token is never stored.
    let ContactSubmission { contact, .. } = submission;

    let record = store
        .create_contact(&contact)
        .await
        .map_err(ContactError::PersistenceError)?;

    Ok(HttpResponse::Ok().json(ContactResponse {
        success: true,
        message: CONFIRMATION_MESSAGE,
        id: Some(record.id),
        errors: None,
    }))
}
