//! src/domain/contact/subject.rs
use serde::{Deserialize, Serialize};

#[derive(thiserror::Error, Debug)]
#[error("Please choose one of the listed subjects")]
pub struct Error(String);

/// Categories offered by the subject dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Subject {
    FindTutor,
    BecomeTutor,
    GeneralInquiry,
    TechnicalSupport,
    Billing,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::FindTutor,
        Subject::BecomeTutor,
        Subject::GeneralInquiry,
        Subject::TechnicalSupport,
        Subject::Billing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::FindTutor => "find-tutor",
            Subject::BecomeTutor => "become-tutor",
            Subject::GeneralInquiry => "general-inquiry",
            Subject::TechnicalSupport => "technical-support",
            Subject::Billing => "billing",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Subject::FindTutor => "I want to find a tutor",
            Subject::BecomeTutor => "I want to become a tutor",
            Subject::GeneralInquiry => "General inquiry",
            Subject::TechnicalSupport => "Technical support",
            Subject::Billing => "Billing question",
        }
    }

    /// An empty selection means no subject.
    pub fn parse_optional(s: String) -> Result<Option<Self>, Error> {
        let s = s.trim();
        if s.is_empty() {
            return Ok(None);
        }

        Self::ALL
            .into_iter()
            .find(|subject| subject.as_str() == s)
            .map(Some)
            .ok_or_else(|| Error(s.to_string()))
    }
}

impl AsRef<str> for Subject {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
