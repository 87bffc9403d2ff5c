//! src/storage/postgres.rs
use super::{Contact, ContactStore, StoreError};
use crate::configuration::DatabaseSettings;
use crate::domain::NewContact;
use async_trait::async_trait;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct PostgresContactStore {
    pool: PgPool,
}

impl PostgresContactStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// No connection is opened until the first query.
    pub fn connect_lazy(settings: &DatabaseSettings) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_secs(2))
            .connect_lazy_with(settings.connect_options()?);
        Ok(Self::new(pool))
    }

    #[tracing::instrument(name = "Running database migrations", skip(self))]
    pub async fn migrate(&self) -> Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("./migrations").run(&self.pool).await
    }
}

#[async_trait]
impl ContactStore for PostgresContactStore {
    #[tracing::instrument(name = "Saving new contact request in the database", skip(self, contact))]
    async fn create_contact(&self, contact: &NewContact) -> Result<Contact, StoreError> {
        let record = Contact::create(contact);

        sqlx::query(
            r#"
    INSERT INTO contacts (id, name, email, subject, message, country_code, country_iso2, phone, created_at)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            "#,
        )
        .bind(record.id)
        .bind(&record.name)
        .bind(&record.email)
        .bind(&record.subject)
        .bind(&record.message)
        .bind(&record.country_code)
        .bind(&record.country_iso2)
        .bind(&record.phone)
        .bind(record.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            tracing::error!("Failed to execute query: {:#?}", e);
            e
        })?;

        Ok(record)
    }

    #[tracing::instrument(name = "Get contact requests from the database", skip(self))]
    async fn list_contacts(&self) -> Result<Vec<Contact>, StoreError> {
        let contacts = sqlx::query_as::<_, Contact>(
            r#"
        SELECT id, name, email, subject, message, country_code, country_iso2, phone, created_at
        FROM contacts
        ORDER BY created_at DESC
        "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(contacts)
    }
}
