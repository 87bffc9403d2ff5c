//! src/client/mod.rs
//!
//! Browser-side behaviour of the contact form, without any rendering.
mod api;
mod captcha;
mod country_picker;
mod form;

pub use api::{ContactApi, SubmitAccepted, SubmitRejected};
pub use captcha::{
    CaptchaGate, ChallengeWidget, NoopWidget, DEMO_TOKEN, LAPSED_PROMPT, VERIFICATION_PROMPT,
};
pub use country_picker::{CountryPicker, PickerKey, FILTER_DEBOUNCE};
pub use form::{
    subject_options, Blocked, ContactForm, ContactFormValues, Notification, NotificationKind,
    DEFAULT_COUNTRY, DEFAULT_DIAL_CODE, FALLBACK_ERROR_MESSAGE,
};
