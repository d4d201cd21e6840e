//! Shared application state for axum handlers.

use std::sync::Arc;

use registrar_app::ports::StudentRepository;
use registrar_app::services::student_service::StudentService;
use registrar_domain::schema::Schema;

/// Application state shared across all axum handlers.
///
/// Built once at startup and never reassigned. Generic over the repository
/// type to avoid dynamic dispatch. `Clone` is implemented manually so the
/// repository itself does not need to be `Clone`; only the `Arc` is cloned.
pub struct AppState<R> {
    /// Student CRUD service.
    pub student_service: Arc<StudentService<R>>,
    /// Field layout used to encode and decode request bodies.
    pub schema: Schema,
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            student_service: Arc::clone(&self.student_service),
            schema: self.schema,
        }
    }
}

impl<R> AppState<R>
where
    R: StudentRepository + Send + Sync + 'static,
{
    /// Create a new application state from a service instance.
    pub fn new(student_service: StudentService<R>, schema: Schema) -> Self {
        Self::from_arc(Arc::new(student_service), schema)
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    pub fn from_arc(student_service: Arc<StudentService<R>>, schema: Schema) -> Self {
        Self {
            student_service,
            schema,
        }
    }
}
