//! src/client/form.rs
use super::api::{ContactApi, SubmitAccepted, SubmitRejected};
use super::captcha::{CaptchaGate, ChallengeWidget, VERIFICATION_PROMPT};
use crate::countries::{self, Country};
use crate::domain::{ContactRequest, FieldErrors, NewContact, Subject};

pub const DEFAULT_DIAL_CODE: &str = "+1";
pub const DEFAULT_COUNTRY: &str = "US";
pub const FALLBACK_ERROR_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFormValues {
    pub name: String,
    pub email: String,
    pub subject: Option<Subject>,
    pub message: String,
    pub country_code: String,
    pub country_iso2: String,
    pub phone: String,
}

impl Default for ContactFormValues {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: None,
            message: String::new(),
            country_code: DEFAULT_DIAL_CODE.to_string(),
            country_iso2: DEFAULT_COUNTRY.to_string(),
            phone: String::new(),
        }
    }
}

impl ContactFormValues {
    pub fn to_request(&self, recaptcha: Option<&str>) -> ContactRequest {
        fn non_empty(s: &str) -> Option<String> {
            let s = s.trim();
            (!s.is_empty()).then(|| s.to_string())
        }

        ContactRequest {
            name: Some(self.name.clone()),
            email: Some(self.email.clone()),
            subject: self.subject.map(|s| s.as_str().to_string()),
            message: Some(self.message.clone()),
            country_code: non_empty(&self.country_code),
            country_iso2: non_empty(&self.country_iso2),
            phone: non_empty(&self.phone),
            recaptcha: recaptcha.map(String::from),
        }
    }
}

/// `(value, label)` pairs for the subject dropdown.
pub fn subject_options() -> impl Iterator<Item = (&'static str, &'static str)> {
    Subject::ALL.into_iter().map(|s| (s.as_str(), s.label()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A toast shown to the visitor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: &'static str,
    pub message: String,
}

#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Blocked {
    #[error("Please correct the highlighted fields")]
    Invalid,
    #[error("Please complete the reCAPTCHA verification")]
    Unverified,
    #[error("Your message is already being sent")]
    InFlight,
}

impl Blocked {
    pub fn notification(&self) -> Option<Notification> {
        match self {
            Blocked::Unverified => Some(Notification {
                kind: NotificationKind::Error,
                title: "Verification required",
                message: VERIFICATION_PROMPT.to_string(),
            }),
            Blocked::Invalid | Blocked::InFlight => None,
        }
    }
}

/// Headless contact form: values, field errors, CAPTCHA gate and the
/// in-flight flag.
pub struct ContactForm<W> {
    values: ContactFormValues,
    errors: FieldErrors,
    captcha: CaptchaGate,
    widget: W,
    submitting: bool,
}

impl<W: ChallengeWidget> ContactForm<W> {
    pub fn new(widget: W) -> Self {
        Self {
            values: ContactFormValues::default(),
            errors: FieldErrors::default(),
            captcha: CaptchaGate::default(),
            widget,
            submitting: false,
        }
    }

    pub fn values(&self) -> &ContactFormValues {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut ContactFormValues {
        &mut self.values
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error(&self, field: &str) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn captcha(&self) -> &CaptchaGate {
        &self.captcha
    }

    pub fn captcha_mut(&mut self) -> &mut CaptchaGate {
        &mut self.captcha
    }

    pub fn widget(&self) -> &W {
        &self.widget
    }

    /// Sets dial code and country together, replacing any prior choice.
    pub fn select_country(&mut self, country: &Country) {
        self.values.country_code = country.dial_code.to_string();
        self.values.country_iso2 = country.iso2.to_string();
    }

    pub fn selected_country(&self) -> Option<&'static Country> {
        countries::find_by_iso2(&self.values.country_iso2)
    }

    /// Runs the field checks and attaches their errors. The CAPTCHA is
    /// gated separately.
    pub fn validate(&mut self) -> bool {
        match NewContact::try_from(self.values.to_request(None)) {
            Ok(_) => {
                self.errors = FieldErrors::default();
                true
            }
            Err(errors) => {
                self.errors = errors;
                false
            }
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn can_submit(&self) -> bool {
        self.captcha.is_verified() && !self.submitting
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting {
            "Sending..."
        } else if let Some(prompt) = self.captcha.prompt() {
            prompt
        } else {
            "Send Message"
        }
    }

    /// Checks everything that can be checked locally and marks the form as
    /// busy. The returned request is what goes on the wire.
    pub fn begin_submission(&mut self) -> Result<ContactRequest, Blocked> {
        if self.submitting {
            return Err(Blocked::InFlight);
        }
        if !self.validate() {
            return Err(Blocked::Invalid);
        }
        let token = self.captcha.token().ok_or(Blocked::Unverified)?;

        let request = self.values.to_request(Some(token));
        self.submitting = true;
        Ok(request)
    }

    pub fn finish_submission(
        &mut self,
        outcome: Result<SubmitAccepted, SubmitRejected>,
    ) -> Notification {
        self.submitting = false;

        match outcome {
            Ok(accepted) => {
                self.values = ContactFormValues::default();
                self.errors = FieldErrors::default();
                self.captcha.reset();
                self.widget.reset_challenge();

                Notification {
                    kind: NotificationKind::Success,
                    title: "Message sent successfully!",
                    message: accepted.message,
                }
            }
            Err(rejected) => {
                if !rejected.errors.is_empty() {
                    self.errors = rejected.errors;
                }

                Notification {
                    kind: NotificationKind::Error,
                    title: "Error sending message",
                    message: rejected
                        .message
                        .unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
                }
            }
        }
    }

    pub async fn submit(&mut self, api: &ContactApi) -> Result<Notification, Blocked> {
        let request = self.begin_submission()?;
        let outcome = api.submit(&request).await;
        Ok(self.finish_submission(outcome))
    }
}
