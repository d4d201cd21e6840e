//! Storage port — repository trait for student persistence.
//!
//! Implementations must be safe to share between concurrently running
//! requests; the application performs no locking of its own.

use std::future::Future;

use registrar_domain::error::RegistrarError;
use registrar_domain::id::StudentId;
use registrar_domain::student::{Student, StudentDraft, StudentPatch};

/// Persistence operations on the student collection.
///
/// Each method maps to exactly one store operation.
pub trait StudentRepository {
    /// Insert a new record. The store assigns the identifier.
    fn create(
        &self,
        draft: StudentDraft,
    ) -> impl Future<Output = Result<Student, RegistrarError>> + Send;

    /// Return every record in the store's natural order.
    ///
    /// A record that does not decode fails the whole call.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Student>, RegistrarError>> + Send;

    /// Set the fields present in `patch` on the record with `id`.
    ///
    /// Returns the number of records matched (`0` or `1`).
    fn update(
        &self,
        id: StudentId,
        patch: StudentPatch,
    ) -> impl Future<Output = Result<u64, RegistrarError>> + Send;

    /// Remove the record with `id`.
    ///
    /// Returns the number of records removed (`0` or `1`).
    fn delete(&self, id: StudentId) -> impl Future<Output = Result<u64, RegistrarError>> + Send;
}
