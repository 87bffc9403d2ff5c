//! src/storage/mod.rs
mod memory;
mod postgres;

pub use memory::InMemoryContactStore;
pub use postgres::PostgresContactStore;

use crate::domain::NewContact;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("Failed to execute query")]
    Database(#[from] sqlx::Error),
}

/// A stored contact request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub subject: Option<String>,
    pub message: String,
    pub country_code: Option<String>,
    pub country_iso2: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Assigns a fresh id and timestamp.
    pub fn create(contact: &NewContact) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: contact.name.as_ref().to_string(),
            email: contact.email.as_ref().to_string(),
            subject: contact.subject.map(|s| s.as_str().to_string()),
            message: contact.message.as_ref().to_string(),
            country_code: contact.country_code.as_ref().map(|c| c.as_ref().to_string()),
            country_iso2: contact.country_iso2.as_ref().map(|c| c.as_ref().to_string()),
            phone: contact.phone.as_ref().map(|p| p.as_ref().to_string()),
            created_at: Utc::now(),
        }
    }
}

/// Where contact requests end up.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn create_contact(&self, contact: &NewContact) -> Result<Contact, StoreError>;

    /// Newest first.
    async fn list_contacts(&self) -> Result<Vec<Contact>, StoreError>;
}
