//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod payload;
#[allow(clippy::missing_errors_doc)]
pub mod students;

use axum::Router;
use axum::routing::{get, put};

use registrar_app::ports::StudentRepository;

use crate::state::AppState;

/// Build the API sub-router.
pub fn routes<R>() -> Router<AppState<R>>
where
    R: StudentRepository + Send + Sync + 'static,
{
    Router::new()
        .route(
            "/students",
            get(students::list::<R>).post(students::create::<R>),
        )
        .route(
            "/students/{id}",
            put(students::update::<R>).delete(students::delete::<R>),
        )
}
