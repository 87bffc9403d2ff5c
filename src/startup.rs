//! src/startup.rs
use crate::captcha::CaptchaVerifier;
use crate::configuration::{Settings, StorageBackend};
use crate::routes::{
    health_check, json_error_handler, list_contacts, recaptcha_config, submit_contact,
    RecaptchaSiteKey,
};
use crate::storage::{ContactStore, InMemoryContactStore, PostgresContactStore};
use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_actix_web::TracingLogger;

pub struct Application {
    port: u16,
    server: Server,
}

impl Application {
    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run(self) -> std::io::Result<()> {
        self.server.await
    }
}

/// Builds the store selected by `database.backend` and binds the server.
pub async fn build(config: Settings) -> Result<Application, anyhow::Error> {
    let store: Arc<dyn ContactStore> = match config.database.backend {
        StorageBackend::Postgres => {
            let store = PostgresContactStore::connect_lazy(&config.database)
                .context("Invalid database settings")?;
            if config.database.migrate {
                store
                    .migrate()
                    .await
                    .context("Failed to migrate the database")?;
            }
            Arc::new(store)
        }
        StorageBackend::Memory => {
            tracing::warn!("Contact requests are kept in memory and will be lost on restart");
            Arc::new(InMemoryContactStore::new())
        }
    };

    build_with_store(config, store)
}

pub fn build_with_store(
    config: Settings,
    store: Arc<dyn ContactStore>,
) -> Result<Application, anyhow::Error> {
    let verifier = CaptchaVerifier::from_settings(&config.recaptcha)?;
    let site_key = RecaptchaSiteKey(config.recaptcha.site_key().map(String::from));

    let address = format!("{}:{}", config.application.host, config.application.port);
    let tcp_listener =
        TcpListener::bind(&address).with_context(|| format!("Failed to bind {}", address))?;
    let port = tcp_listener.local_addr()?.port();

    let server = run(tcp_listener, store, verifier, site_key)?;

    Ok(Application { port, server })
}

pub fn run(
    listener: TcpListener,
    store: Arc<dyn ContactStore>,
    verifier: CaptchaVerifier,
    site_key: RecaptchaSiteKey,
) -> Result<Server, std::io::Error> {
    let store: web::Data<dyn ContactStore> = web::Data::from(store);
    let verifier = web::Data::new(verifier);
    let site_key = web::Data::new(site_key);

    let server = HttpServer::new(move || {
        App::new()
            .wrap(TracingLogger::default())
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/health_check", web::get().to(health_check))
            .service(
                web::scope("/api")
                    .route("/contact", web::post().to(submit_contact))
                    .route("/contacts", web::get().to(list_contacts))
                    .route("/config/recaptcha", web::get().to(recaptcha_config)),
            )
            .app_data(store.clone())
            .app_data(verifier.clone())
            .app_data(site_key.clone())
    })
    .listen(listener)?
    .run();

    Ok(server)
}
