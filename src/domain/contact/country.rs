//! src/domain/contact/country.rs
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Please choose a valid country code")]
    InvalidDialCode(String),
    #[error("Please choose a valid country")]
    InvalidIso2(String),
}

/// International calling prefix, e.g. `+44`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DialCode(String);

impl DialCode {
    pub fn parse_optional(s: String) -> Result<Option<Self>, Error> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }

        let digits = s
            .strip_prefix('+')
            .ok_or_else(|| Error::InvalidDialCode(s.to_string()))?;
        let well_formed =
            (1..=4).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit());
        if !well_formed {
            return Err(Error::InvalidDialCode(s.to_string()));
        }

        Ok(Some(Self(s.to_string())))
    }
}

impl AsRef<str> for DialCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Two-letter country identifier, always upper case.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CountryIso2(String);

impl CountryIso2 {
    pub fn parse_optional(s: String) -> Result<Option<Self>, Error> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }

        if s.len() != 2 || !s.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(Error::InvalidIso2(s.to_string()));
        }

        Ok(Some(Self(s.to_ascii_uppercase())))
    }
}

impl AsRef<str> for CountryIso2 {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
