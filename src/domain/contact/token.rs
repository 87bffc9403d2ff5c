//! src/domain/contact/token.rs

#[derive(thiserror::Error, Debug)]
#[error("reCAPTCHA verification required")]
pub struct Error;

/// Opaque challenge response produced by the CAPTCHA widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptchaToken(String);

impl CaptchaToken {
    pub fn parse(s: String) -> Result<Self, Error> {
        if s.trim().is_empty() {
            return Err(Error);
        }
        Ok(Self(s))
    }
}

impl AsRef<str> for CaptchaToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
