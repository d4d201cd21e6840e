//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`RegistrarError`] via `From`. Adapters box their errors into the
//! [`RegistrarError::Storage`] variant so this crate stays free of IO types.

/// Top-level error returned by application services.
#[derive(Debug, thiserror::Error)]
pub enum RegistrarError {
    /// The caller supplied input that cannot be accepted.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The document store failed, timed out, or returned a malformed record.
    #[error("storage error: {0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

/// Client input errors. These are always raised before the store is reached.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    /// The identifier is not in the store's native format.
    #[error("invalid id {value:?}: expected 24 hexadecimal characters")]
    InvalidId { value: String },

    /// The `name` field is missing or blank.
    #[error("name must not be empty")]
    EmptyName,

    /// An update request carried no field to modify.
    #[error("update must set at least one field")]
    EmptyPatch,

    /// The request body could not be decoded.
    #[error("invalid request body: {0}")]
    InvalidBody(String),
}

impl RegistrarError {
    /// Box any error as a storage failure.
    pub fn storage<E>(err: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::Storage(Box::new(err))
    }

    /// Render this error and its full `source()` chain as one line.
    ///
    /// Storage errors wrap driver errors whose useful detail lives in the
    /// source chain, so callers get `outer: inner: root`.
    #[must_use]
    pub fn chain_message(&self) -> String {
        let mut message = self.to_string();
        let mut source = std::error::Error::source(self);
        if let Self::Storage(inner) = self {
            // `Display` already printed the boxed error itself.
            source = inner.source();
        }
        while let Some(err) = source {
            message.push_str(": ");
            message.push_str(&err.to_string());
            source = err.source();
        }
        message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, thiserror::Error)]
    #[error("outer")]
    struct Outer(#[source] Inner);

    #[derive(Debug, thiserror::Error)]
    #[error("connection refused")]
    struct Inner;

    #[test]
    fn should_convert_validation_error_with_from() {
        let err: RegistrarError = ValidationError::EmptyName.into();
        assert!(matches!(
            err,
            RegistrarError::Validation(ValidationError::EmptyName)
        ));
    }

    #[test]
    fn should_render_validation_message_transparently() {
        let err: RegistrarError = ValidationError::EmptyPatch.into();
        assert_eq!(err.to_string(), "update must set at least one field");
    }

    #[test]
    fn should_include_source_chain_in_storage_message() {
        let err = RegistrarError::storage(Outer(Inner));
        assert_eq!(
            err.chain_message(),
            "storage error: outer: connection refused"
        );
    }

    #[test]
    fn should_quote_invalid_id_value() {
        let err = ValidationError::InvalidId {
            value: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid id \"abc\": expected 24 hexadecimal characters"
        );
    }
}
