//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `registrar.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::time::Duration;

use serde::Deserialize;

use registrar_app::deadline::Deadlines;
use registrar_domain::schema::{Schema, TextField};

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Document store settings.
    pub database: DatabaseConfig,
    /// Record field layout.
    pub schema: SchemaConfig,
    /// Per-operation deadlines, in seconds.
    pub timeouts: TimeoutsConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `MongoDB` configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Connection string.
    pub url: String,
    /// Database name.
    pub name: String,
    /// Collection holding student records.
    pub collection: String,
}

/// Record schema configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SchemaConfig {
    /// Name of the free-text attribute.
    pub text_field: TextField,
}

/// Deadlines in whole seconds.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct TimeoutsConfig {
    /// Startup connection and ping.
    pub connect: u64,
    /// List requests.
    pub read: u64,
    /// Create, update and delete requests.
    pub write: u64,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `registrar.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("registrar.toml")?;
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Ok(val) = std::env::var("REGISTRAR_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("REGISTRAR_PORT")
            && let Ok(port) = val.parse()
        {
            self.server.port = port;
        }
        if let Ok(val) = std::env::var("REGISTRAR_BIND")
            && let Some((host, port)) = val.rsplit_once(':')
        {
            self.server.host = host.to_string();
            if let Ok(port) = port.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("REGISTRAR_DATABASE_URL") {
            self.database.url = val;
        }
        if let Ok(val) = std::env::var("REGISTRAR_DATABASE_NAME") {
            self.database.name = val;
        }
        if let Ok(val) = std::env::var("REGISTRAR_COLLECTION") {
            self.database.collection = val;
        }
        if let Ok(val) = std::env::var("REGISTRAR_TEXT_FIELD") {
            self.schema.text_field = val
                .parse::<TextField>()
                .map_err(|err| ConfigError::Validation(err.to_string()))?;
        }
        if let Ok(val) = std::env::var("REGISTRAR_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        if self.database.name.is_empty() {
            return Err(ConfigError::Validation(
                "database name must not be empty".to_string(),
            ));
        }
        if self.database.collection.is_empty() {
            return Err(ConfigError::Validation(
                "collection name must not be empty".to_string(),
            ));
        }
        let timeouts = &self.timeouts;
        if timeouts.connect == 0 || timeouts.read == 0 || timeouts.write == 0 {
            return Err(ConfigError::Validation(
                "timeouts must be non-zero".to_string(),
            ));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Field layout of stored records.
    #[must_use]
    pub fn schema(&self) -> Schema {
        Schema::new(self.schema.text_field)
    }

    /// Deadlines applied to request-scoped store calls.
    #[must_use]
    pub fn deadlines(&self) -> Deadlines {
        Deadlines {
            read: Duration::from_secs(self.timeouts.read),
            write: Duration::from_secs(self.timeouts.write),
        }
    }

    /// Settings for the store binding.
    #[must_use]
    pub fn storage(&self) -> registrar_adapter_storage_mongodb::Config {
        registrar_adapter_storage_mongodb::Config {
            uri: self.database.url.clone(),
            database: self.database.name.clone(),
            collection: self.database.collection.clone(),
            connect_timeout: Duration::from_secs(self.timeouts.connect),
            schema: self.schema(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "mongodb://localhost:27017".to_string(),
            name: "studentdb".to_string(),
            collection: "students".to_string(),
        }
    }
}

impl Default for TimeoutsConfig {
    fn default() -> Self {
        Self {
            connect: 10,
            read: 10,
            write: 5,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "registrard=info,registrar=info,tower_http=debug".to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}
