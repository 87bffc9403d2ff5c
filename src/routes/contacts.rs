//! src/routes/contacts.rs
use crate::routes::error_chain_fmt;
use crate::storage::{ContactStore, StoreError};
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse, ResponseError};

#[derive(thiserror::Error)]
pub enum ListContactsError {
    #[error("Failed to retrieve contact requests")]
    PersistenceError(#[source] StoreError),
}

impl std::fmt::Debug for ListContactsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        error_chain_fmt(self, f)
    }
}

impl ResponseError for ListContactsError {
    fn status_code(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!(error.cause_chain = ?self, "Error fetching contacts");
        HttpResponse::build(self.status_code())
            .json(serde_json::json!({ "message": "Internal server error" }))
    }
}

#[tracing::instrument(name = "Listing contact requests", skip(store))]
pub async fn list_contacts(
    store: web::Data<dyn ContactStore>,
) -> Result<HttpResponse, ListContactsError> {
    let contacts = store
        .list_contacts()
        .await
        .map_err(ListContactsError::PersistenceError)?;

    Ok(HttpResponse::Ok().json(contacts))
}
