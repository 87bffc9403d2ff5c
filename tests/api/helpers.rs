//! tests/api/helpers.rs

use async_trait::async_trait;
use once_cell::sync::Lazy;
use secrecy::Secret;
use std::sync::Arc;
use tutorhub::configuration::{get_configuration, Settings, StorageBackend};
use tutorhub::domain::NewContact;
use tutorhub::startup::build_with_store;
use tutorhub::storage::{Contact, ContactStore, InMemoryContactStore, StoreError};
use tutorhub::telemetry::{get_subscriber, init_subscriber};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

static TRACING: Lazy<()> = Lazy::new(|| {
    let default_filter_level = "info".to_string();
    let subscriber_name = "test".to_string();

    // Set TEST_LOG=true to see logs during tests
    // Use bunyan to format the logs nicely:
    // $ TEST_LOG=true cargo test | bunyan
    if std::env::var("TEST_LOG").is_ok() {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::stdout);
        init_subscriber(subscriber).expect("Failed to init tracing");
    } else {
        let subscriber = get_subscriber(subscriber_name, default_filter_level, std::io::sink);
        init_subscriber(subscriber).expect("Failed to init tracing");
    };
});

pub const RECAPTCHA_SECRET: &str = "test-recaptcha-secret";
pub const RECAPTCHA_SITE_KEY: &str = "test-recaptcha-site-key";

pub struct Test {
    pub address: String,
    pub store: Arc<InMemoryContactStore>,
    pub recaptcha_server: MockServer,
}

impl Test {
    pub async fn get(&self, path: &str) -> reqwest::Response {
        reqwest::get(&format!("{}{}", self.address, path))
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact(&self, body: &serde_json::Value) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/api/contact", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request.")
    }

    pub async fn post_contact_raw(&self, body: &str) -> reqwest::Response {
        reqwest::Client::new()
            .post(&format!("{}/api/contact", self.address))
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .await
            .expect("Failed to execute request.")
    }

    /// Makes the verification service accept every token.
    pub async fn accept_recaptcha(&self) {
        Mock::given(method("POST"))
            .and(path("/siteverify"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({ "success": true })),
            )
            .mount(&self.recaptcha_server)
            .await;
    }
}

/// A store whose every call fails.
pub struct BrokenStore;

#[async_trait]
impl ContactStore for BrokenStore {
    async fn create_contact(&self, _contact: &NewContact) -> Result<Contact, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }

    async fn list_contacts(&self) -> Result<Vec<Contact>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolTimedOut))
    }
}

pub fn valid_body() -> serde_json::Value {
    serde_json::json!({
        "name": "Ursula Le Guin",
        "email": "ursula_le_guin@gmail.com",
        "subject": "find-tutor",
        "message": "I am looking for a physics tutor for my son.",
        "countryCode": "+44",
        "countryIso2": "GB",
        "phone": "20 7946 0958",
        "recaptcha": "valid-token"
    })
}

fn test_configuration(recaptcha_server: &MockServer) -> Settings {
    let mut config = get_configuration().expect("Failed to read configuration.");
    config.application.host = "127.0.0.1".into();
    config.application.port = 0;
    config.database.backend = StorageBackend::Memory;
    config.set_recaptcha_url(format!("{}/siteverify", recaptcha_server.uri()));
    config.recaptcha.secret_key = Some(Secret::new(RECAPTCHA_SECRET.to_string()));
    config.recaptcha.site_key = Some(RECAPTCHA_SITE_KEY.to_string());
    config.recaptcha.allow_unverified = false;
    config
}

/// Launches the application with reCAPTCHA verification enabled.
pub async fn setup() -> Test {
    setup_with(|_| {}, None).await
}

/// Launches the application without any reCAPTCHA keys.
pub async fn setup_without_recaptcha() -> Test {
    setup_with(
        |config| {
            config.recaptcha.secret_key = None;
            config.recaptcha.site_key = None;
            config.recaptcha.allow_unverified = true;
        },
        None,
    )
    .await
}

pub async fn setup_with<F>(customise: F, store: Option<Arc<dyn ContactStore>>) -> Test
where
    F: FnOnce(&mut Settings),
{
    Lazy::force(&TRACING);

    let recaptcha_server = MockServer::start().await;
    let mut config = test_configuration(&recaptcha_server);
    customise(&mut config);

    let memory = Arc::new(InMemoryContactStore::new());
    let store = store.unwrap_or_else(|| memory.clone() as Arc<dyn ContactStore>);

    let app = build_with_store(config, store).expect("Failed to build server.");
    let address = format!("http://127.0.0.1:{}", app.port());

    // Launch the server as a background task
    let _ = tokio::spawn(app.run());

    Test {
        address,
        store: memory,
        recaptcha_server,
    }
}
