//! src/domain/mod.rs
pub mod contact;
pub use contact::{
    CaptchaToken, ContactEmail, ContactMessage, ContactName, ContactRequest, ContactSubmission,
    CountryIso2, DialCode, FieldError, FieldErrors, NewContact, PhoneNumber, Subject,
};
