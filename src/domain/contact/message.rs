//! src/domain/contact/message.rs
use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

const MAX_GRAPHEMES: usize = 5000;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Please enter your message")]
    Empty,
    #[error("Your message must not be more than 5000 characters long")]
    TooLong,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct ContactMessage(String);

impl ContactMessage {
    pub fn parse(s: String) -> Result<Self, Error> {
        if s.trim().is_empty() {
            return Err(Error::Empty);
        }

        if s.graphemes(true).count() > MAX_GRAPHEMES {
            return Err(Error::TooLong);
        }

        Ok(Self(s))
    }
}

impl AsRef<str> for ContactMessage {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
