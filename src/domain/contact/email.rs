//! src/domain/contact/email.rs
use serde::{Deserialize, Serialize};
use validator::validate_email;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Please enter your email address")]
    Empty,
    #[error("Please enter a valid email address")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ContactEmail(String);

impl ContactEmail {
    pub fn parse(s: String) -> Result<Self, Error> {
        let s = s.trim();
        if s.is_empty() {
            return Err(Error::Empty);
        }

        if validate_email(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(Error::Invalid(s.to_string()))
        }
    }
}

impl AsRef<str> for ContactEmail {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ContactEmail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_ref())
    }
}
