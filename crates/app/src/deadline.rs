//! Per-operation deadlines for store calls.
//!
//! A deadline is enforced by dropping the store future when it expires.
//! The same drop also happens when the HTTP server abandons a request
//! (client disconnect), so both paths cancel the in-flight operation.

use std::future::Future;
use std::time::Duration;

use registrar_domain::error::RegistrarError;

/// Deadline applied to each class of store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadlines {
    /// Bound for `list`.
    pub read: Duration,
    /// Bound for `create`, `update` and `delete`.
    pub write: Duration,
}

impl Default for Deadlines {
    fn default() -> Self {
        Self {
            read: Duration::from_secs(10),
            write: Duration::from_secs(5),
        }
    }
}

/// A store operation did not finish before its deadline.
#[derive(Debug, thiserror::Error)]
#[error("{operation} timed out after {}ms", .after.as_millis())]
pub struct DeadlineExceeded {
    pub operation: &'static str,
    pub after: Duration,
}

impl From<DeadlineExceeded> for RegistrarError {
    fn from(err: DeadlineExceeded) -> Self {
        Self::storage(err)
    }
}

/// Run `fut` to completion or fail once `limit` elapses.
///
/// # Errors
///
/// Returns the future's own error, or [`RegistrarError::Storage`] wrapping
/// [`DeadlineExceeded`] on expiry.
pub async fn bounded<T, F>(
    operation: &'static str,
    limit: Duration,
    fut: F,
) -> Result<T, RegistrarError>
where
    F: Future<Output = Result<T, RegistrarError>>,
{
    match tokio::time::timeout(limit, fut).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(
                operation,
                after_ms = limit.as_millis(),
                "store operation timed out"
            );
            Err(DeadlineExceeded {
                operation,
                after: limit,
            }
            .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_ten_second_reads_and_five_second_writes() {
        let deadlines = Deadlines::default();
        assert_eq!(deadlines.read, Duration::from_secs(10));
        assert_eq!(deadlines.write, Duration::from_secs(5));
    }

    #[tokio::test]
    async fn should_pass_through_result_when_in_time() {
        let result = bounded("insert", Duration::from_secs(1), async { Ok(42) }).await;
        assert_eq!(result.unwrap(), 42);
    }

    #[tokio::test]
    async fn should_fail_with_storage_error_when_deadline_expires() {
        let result: Result<(), _> = bounded("find", Duration::from_millis(10), async {
            tokio::time::sleep(Duration::from_secs(5)).await;
            Ok(())
        })
        .await;

        let err = result.unwrap_err();
        assert!(matches!(err, RegistrarError::Storage(_)));
        assert_eq!(err.to_string(), "storage error: find timed out after 10ms");
    }
}
