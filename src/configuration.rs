//! src/configuration.rs
use config::{Config, ConfigError, File};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::str::FromStr;

#[derive(Deserialize, Clone, Debug)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub application: ApplicationSettings,
    pub recaptcha: RecaptchaSettings,
}

impl Settings {
    pub fn set_recaptcha_url(&mut self, verify_url: String) {
        self.recaptcha.verify_url = verify_url;
    }
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Postgres,
    Memory,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SslMode {
    Disable,
    Prefer,
    Require,
}

impl FromStr for SslMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "disable" => Ok(SslMode::Disable),
            "prefer" | "allow" => Ok(SslMode::Prefer),
            "require" | "verify-ca" | "verify-full" => Ok(SslMode::Require),
            other => Err(format!("{} is not a supported ssl mode.", other)),
        }
    }
}

impl SslMode {
    /// Reads a `PGSSLMODE` value. Unknown modes keep TLS on.
    pub fn from_pgsslmode(value: &str) -> Self {
        value.parse().unwrap_or_else(|e: String| {
            tracing::warn!("{} Falling back to `require`.", e);
            SslMode::Require
        })
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct DatabaseSettings {
    pub backend: StorageBackend,
    pub username: String,
    pub password: Secret<String>,
    pub port: u16,
    pub host: String,
    pub database_name: String,
    pub ssl_mode: SslMode,
    #[serde(default)]
    pub migrate: bool,
    /// A full connection string, takes precedence over the individual fields.
    #[serde(default)]
    pub url: Option<Secret<String>>,
}

#[derive(Deserialize, Clone, Debug)]
pub struct ApplicationSettings {
    pub port: u16,
    pub host: String,
}

#[derive(Deserialize, Clone, Debug)]
pub struct RecaptchaSettings {
    pub verify_url: String,
    /// Accept submissions without verification when no secret is configured.
    pub allow_unverified: bool,
    #[serde(default)]
    pub site_key: Option<String>,
    #[serde(default)]
    pub secret_key: Option<Secret<String>>,
}

impl RecaptchaSettings {
    pub fn secret(&self) -> Option<&Secret<String>> {
        self.secret_key
            .as_ref()
            .filter(|secret| !secret.expose_secret().trim().is_empty())
    }

    pub fn site_key(&self) -> Option<&str> {
        self.site_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
    }
}

#[derive(Deserialize)]
struct RecaptchaKeys {
    site_key: Option<String>,
    secret_key: Option<Secret<String>>,
}

impl DatabaseSettings {
    pub fn connect_options(&self) -> Result<PgConnectOptions, sqlx::Error> {
        let options = match &self.url {
            Some(url) => PgConnectOptions::from_str(url.expose_secret())?,
            None => PgConnectOptions::new()
                .host(&self.host)
                .username(&self.username)
                .password(self.password.expose_secret())
                .port(self.port)
                .database(&self.database_name),
        };

        let ssl_mode = match self.ssl_mode {
            SslMode::Disable => PgSslMode::Disable,
            SslMode::Prefer => PgSslMode::Prefer,
            SslMode::Require => PgSslMode::Require,
        };

        Ok(options.ssl_mode(ssl_mode))
    }
}

#[derive(PartialEq, Debug)]
pub enum Environment {
    Local,
    Production,
}
impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Local => "local",
            Environment::Production => "production",
        }
    }
}

impl TryFrom<String> for Environment {
    type Error = String;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        match s.as_ref() {
            "local" => Ok(Environment::Local),
            "production" => Ok(Environment::Production),
            _ => Err(format!(
                "{} is not a supported environment. Use either `local` or `production`.",
                s
            )),
        }
    }
}

pub fn get_configuration() -> Result<Settings, ConfigError> {
    let base_path = std::env::current_dir().map_err(|e| {
        ConfigError::Message(format!("Failed to determine the current directory: {}", e))
    })?;
    let configuration_directory = base_path.join("configuration");

    // Detect the running environment.
    // Default to `local` if not specified.
    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".into())
        .try_into()
        .map_err(ConfigError::Message)?;

    if environment == Environment::Local {
        // A missing .env file is fine, everything it sets can come from the shell.
        let _ = dotenvy::dotenv();
    }

    let settings = Config::builder()
        .add_source(File::from(configuration_directory.join("base")).required(true))
        .add_source(File::from(configuration_directory.join(environment.as_str())).required(true))
        .add_source(
            config::Environment::with_prefix("APP")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let mut settings: Settings = settings.try_deserialize()?;

    if let Ok(url) = std::env::var("DATABASE_URL") {
        settings.database.url = Some(Secret::new(url));
    }

    if let Ok(mode) = std::env::var("PGSSLMODE") {
        settings.database.ssl_mode = SslMode::from_pgsslmode(&mode);
    }

    let keys = envy::prefixed("RECAPTCHA_")
        .from_env::<RecaptchaKeys>()
        .map_err(|e| ConfigError::Message(format!("Failed to parse recaptcha settings: {}", e)))?;
    if keys.site_key.is_some() {
        settings.recaptcha.site_key = keys.site_key;
    }
    if keys.secret_key.is_some() {
        settings.recaptcha.secret_key = keys.secret_key;
    }

    Ok(settings)
}
