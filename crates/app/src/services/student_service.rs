//! Student service — use-cases for managing student records.

use registrar_domain::error::RegistrarError;
use registrar_domain::id::StudentId;
use registrar_domain::student::{Student, StudentDraft, StudentPatch};

use crate::deadline::{Deadlines, bounded};
use crate::ports::StudentRepository;

/// Application service for student CRUD operations.
///
/// Every method performs input validation first and then exactly one
/// repository call, bounded by the matching entry of [`Deadlines`].
pub struct StudentService<R> {
    repo: R,
    deadlines: Deadlines,
}

impl<R: StudentRepository> StudentService<R> {
    /// Create a new service backed by the given repository, using the
    /// default deadlines.
    pub fn new(repo: R) -> Self {
        Self::with_deadlines(repo, Deadlines::default())
    }

    /// Create a new service with explicit deadlines.
    pub fn with_deadlines(repo: R, deadlines: Deadlines) -> Self {
        Self { repo, deadlines }
    }

    /// Insert a new student after validating domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarError::Validation`] if invariants fail, or a
    /// storage error (including deadline expiry) from the repository.
    pub async fn create_student(&self, draft: StudentDraft) -> Result<Student, RegistrarError> {
        draft.validate()?;
        let created = bounded("insert", self.deadlines.write, self.repo.create(draft)).await?;
        tracing::debug!(id = %created.id, "student created");
        Ok(created)
    }

    /// List all students.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository, including a
    /// record that fails to decode.
    pub async fn list_students(&self) -> Result<Vec<Student>, RegistrarError> {
        bounded("find", self.deadlines.read, self.repo.get_all()).await
    }

    /// Overwrite the fields present in `patch` on the student with `id`.
    ///
    /// Matching no record is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarError::Validation`] for an empty or invalid patch,
    /// or a storage error from the repository.
    pub async fn update_student(
        &self,
        id: StudentId,
        patch: StudentPatch,
    ) -> Result<(), RegistrarError> {
        patch.validate()?;
        let matched = bounded("update", self.deadlines.write, self.repo.update(id, patch)).await?;
        if matched == 0 {
            tracing::debug!(%id, "update matched no student");
        }
        Ok(())
    }

    /// Delete the student with `id`.
    ///
    /// Deleting a missing record is not an error.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn delete_student(&self, id: StudentId) -> Result<(), RegistrarError> {
        let deleted = bounded("delete", self.deadlines.write, self.repo.delete(id)).await?;
        if deleted == 0 {
            tracing::debug!(%id, "delete matched no student");
        }
        Ok(())
    }
}
