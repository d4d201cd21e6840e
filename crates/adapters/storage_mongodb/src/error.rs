//! Storage-specific error type wrapping driver errors.

use std::time::Duration;

use registrar_domain::error::RegistrarError;

/// Errors originating from the `MongoDB` storage layer.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// A command, query or connection failed inside the driver.
    #[error("database error")]
    Database(#[from] mongodb::error::Error),

    /// The startup ping did not complete in time.
    #[error("database unreachable after {}s", .0.as_secs())]
    Unreachable(Duration),

    /// A stored document does not have the expected shape.
    #[error("malformed record {id}: field {field:?} {reason}")]
    Decode {
        id: String,
        field: &'static str,
        reason: &'static str,
    },

    /// The insert acknowledgment carried something other than an object id.
    #[error("insert returned a non object id identifier")]
    UnexpectedInsertedId,
}

impl From<StorageError> for RegistrarError {
    fn from(err: StorageError) -> Self {
        Self::Storage(Box::new(err))
    }
}
