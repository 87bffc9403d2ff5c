//! src/storage/memory.rs
use super::{Contact, ContactStore, StoreError};
use crate::domain::NewContact;
use async_trait::async_trait;
use tokio::sync::RwLock;

/// Keeps contact requests in process memory, for development and tests.
#[derive(Debug, Default)]
pub struct InMemoryContactStore {
    contacts: RwLock<Vec<Contact>>,
}

impl InMemoryContactStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.contacts.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.contacts.read().await.is_empty()
    }
}

#[async_trait]
impl ContactStore for InMemoryContactStore {
    #[tracing::instrument(name = "Saving new contact request in memory", skip(self, contact))]
    async fn create_contact(&self, contact: &NewContact) -> Result<Contact, StoreError> {
        let record = Contact::create(contact);
        self.contacts.write().await.push(record.clone());
        Ok(record)
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>, StoreError> {
        let contacts = self.contacts.read().await;
        Ok(contacts.iter().rev().cloned().collect())
    }
}
