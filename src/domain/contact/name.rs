//! src/domain/contact/name.rs
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

const MAX_GRAPHEMES: usize = 256;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Please enter your name")]
    Empty,
    #[error("Your name must not be more than 256 characters long")]
    TooLong,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ContactName(String);

impl ContactName {
    pub fn parse(s: String) -> Result<Self, Error> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(Error::Empty);
        }

        // A grapheme is defined by the Unicode standard as a "user-perceived"
        // character: `å` is a single grapheme, but it is composed of two characters
        // (`a` and `̊`).
        let is_too_long = trimmed.graphemes(true).count() > MAX_GRAPHEMES;
        if is_too_long {
            return Err(Error::TooLong);
        }

        Ok(Self(trimmed.to_string()))
    }
}

impl AsRef<str> for ContactName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
