//! src/domain/contact/phone.rs
use serde::{Deserialize, Serialize};

const MIN_DIGITS: usize = 7;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Please enter a valid phone number")]
    InvalidCharacters,
    #[error("Please enter a valid phone number")]
    TooFewDigits,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct PhoneNumber(String);

fn is_allowed(c: char) -> bool {
    c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '(' | ')' | '+')
}

impl PhoneNumber {
    /// Blank input means no phone number was given.
    pub fn parse_optional(s: String) -> Result<Option<Self>, Error> {
        if s.trim().is_empty() {
            return Ok(None);
        }

        if !s.chars().all(is_allowed) {
            return Err(Error::InvalidCharacters);
        }

        if s.chars().filter(char::is_ascii_digit).count() < MIN_DIGITS {
            return Err(Error::TooFewDigits);
        }

        Ok(Some(Self(s)))
    }

    pub fn digits(&self) -> String {
        self.0.chars().filter(char::is_ascii_digit).collect()
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
