//! src/domain/contact/mod.rs
mod country;
mod email;
mod message;
mod name;
mod phone;
mod subject;
mod token;

pub use country::{CountryIso2, DialCode};
pub use email::ContactEmail;
pub use message::ContactMessage;
pub use name::ContactName;
pub use phone::PhoneNumber;
pub use subject::Subject;
pub use token::CaptchaToken;

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Body of `POST /api/contact`.
///
/// Every field is optional on the wire so that a missing key is reported
/// as a field error instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_iso2: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recaptcha: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// Validation failures, in field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(Vec<FieldError>);

impl FieldErrors {
    pub fn push(&mut self, field: &str, message: impl Display) {
        self.0.push(FieldError {
            field: field.to_string(),
            message: message.to_string(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// First message attached to `field`.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }

    fn check<T, E: Display>(&mut self, field: &str, result: Result<T, E>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(e) => {
                self.push(field, e);
                None
            }
        }
    }
}

impl Display for FieldErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<_> = self.0.iter().map(|e| e.field.as_str()).collect();
        write!(f, "Invalid fields: {}", fields.join(", "))
    }
}

impl std::error::Error for FieldErrors {}

/// A validated contact request, ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewContact {
    pub name: ContactName,
    pub email: ContactEmail,
    pub subject: Option<Subject>,
    pub message: ContactMessage,
    pub country_code: Option<DialCode>,
    pub country_iso2: Option<CountryIso2>,
    pub phone: Option<PhoneNumber>,
}

impl NewContact {
    fn parse(request: ContactRequest, errors: &mut FieldErrors) -> Option<Self> {
        let name = errors.check("name", ContactName::parse(request.name.unwrap_or_default()));
        let email = errors.check("email", ContactEmail::parse(request.email.unwrap_or_default()));
        let subject = errors.check(
            "subject",
            Subject::parse_optional(request.subject.unwrap_or_default()),
        );
        let message = errors.check(
            "message",
            ContactMessage::parse(request.message.unwrap_or_default()),
        );
        let country_code = errors.check(
            "countryCode",
            DialCode::parse_optional(request.country_code.unwrap_or_default()),
        );
        let country_iso2 = errors.check(
            "countryIso2",
            CountryIso2::parse_optional(request.country_iso2.unwrap_or_default()),
        );
        let phone = errors.check(
            "phone",
            PhoneNumber::parse_optional(request.phone.unwrap_or_default()),
        );

        Some(Self {
            name: name?,
            email: email?,
            subject: subject?,
            message: message?,
            country_code: country_code?,
            country_iso2: country_iso2?,
            phone: phone?,
        })
    }
}

impl TryFrom<ContactRequest> for NewContact {
    type Error = FieldErrors;

    fn try_from(request: ContactRequest) -> Result<Self, Self::Error> {
        let mut errors = FieldErrors::default();
        match Self::parse(request, &mut errors) {
            Some(contact) if errors.is_empty() => Ok(contact),
            _ => Err(errors),
        }
    }
}

/// What the server accepts: a contact plus the challenge token.
#[derive(Debug)]
pub struct ContactSubmission {
    pub contact: NewContact,
    pub recaptcha: CaptchaToken,
}

impl TryFrom<ContactRequest> for ContactSubmission {
    type Error = FieldErrors;

    fn try_from(mut request: ContactRequest) -> Result<Self, Self::Error> {
        let token = request.recaptcha.take().unwrap_or_default();

        let mut errors = FieldErrors::default();
        let contact = NewContact::parse(request, &mut errors);
        let recaptcha = errors.check("recaptcha", CaptchaToken::parse(token));

        match (contact, recaptcha) {
            (Some(contact), Some(recaptcha)) if errors.is_empty() => {
                Ok(Self { contact, recaptcha })
            }
            _ => Err(errors),
        }
    }
}
