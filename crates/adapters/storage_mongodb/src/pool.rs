//! Store binding: client setup and reachability check.

use std::time::Duration;

use mongodb::bson::{Document, doc};
use mongodb::options::ClientOptions;
use mongodb::{Client, Collection};

use registrar_domain::schema::Schema;

use crate::error::StorageError;
use crate::student_repo::MongoStudentRepository;

/// Configuration for the `MongoDB` storage adapter.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string (e.g. `mongodb://localhost:27017`).
    pub uri: String,
    /// Database holding the student collection.
    pub database: String,
    /// Collection holding one document per student.
    pub collection: String,
    /// Upper bound for establishing the binding.
    pub connect_timeout: Duration,
    /// Field layout of stored records.
    pub schema: Schema,
}

impl Config {
    /// Build a [`Database`] from this configuration.
    ///
    /// Parses the connection string, creates the client and pings the
    /// database. The whole sequence must finish within `connect_timeout`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] if the connection string is invalid or the
    /// server cannot be reached in time.
    pub async fn build(self) -> Result<Database, StorageError> {
        let limit = self.connect_timeout;
        tokio::time::timeout(limit, Database::initialize(self))
            .await
            .map_err(|_| StorageError::Unreachable(limit))?
    }
}

/// Holds the student collection handle of the long-lived client.
///
/// Cloning is cheap: the driver reference-counts its connection pool, and
/// every clone talks to the same pool.
#[derive(Debug, Clone)]
pub struct Database {
    collection: Collection<Document>,
    schema: Schema,
}

impl Database {
    async fn initialize(config: Config) -> Result<Self, StorageError> {
        let mut options = ClientOptions::parse(config.uri.as_str()).await?;
        options.connect_timeout = Some(config.connect_timeout);
        options.server_selection_timeout = Some(config.connect_timeout);
        options.app_name.get_or_insert_with(|| "registrard".to_string());

        let client = Client::with_options(options)?;
        let database = client.database(&config.database);
        database.run_command(doc! { "ping": 1 }).await?;

        tracing::info!(
            database = %config.database,
            collection = %config.collection,
            "connected to document store"
        );

        Ok(Self {
            collection: database.collection(&config.collection),
            schema: config.schema,
        })
    }

    /// Borrow the student collection handle.
    #[must_use]
    pub fn collection(&self) -> &Collection<Document> {
        &self.collection
    }

    /// Repository over the bound collection.
    #[must_use]
    pub fn students(&self) -> MongoStudentRepository {
        MongoStudentRepository::new(self.collection.clone(), self.schema)
    }
}
