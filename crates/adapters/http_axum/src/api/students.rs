//! JSON REST handlers for students.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use registrar_app::ports::StudentRepository;
use registrar_domain::id::StudentId;

use super::payload::{StudentRequest, StudentResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Insert acknowledgment carrying the store-assigned identifier.
#[derive(Serialize)]
pub struct InsertedBody {
    pub inserted_id: String,
}

/// Confirmation body for update and delete.
#[derive(Serialize)]
pub struct MessageBody {
    pub message: &'static str,
}

/// Possible responses from the list endpoint.
pub enum ListResponse {
    Ok(Json<Vec<StudentResponse>>),
}

impl IntoResponse for ListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the create endpoint.
pub enum CreateResponse {
    Inserted(Json<InsertedBody>),
}

impl IntoResponse for CreateResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Inserted(json) => json.into_response(),
        }
    }
}

/// Possible responses from the update and delete endpoints.
pub enum MessageResponse {
    Updated,
    Deleted,
}

impl IntoResponse for MessageResponse {
    fn into_response(self) -> Response {
        let message = match self {
            Self::Updated => "Student updated",
            Self::Deleted => "Student deleted",
        };
        Json(MessageBody { message }).into_response()
    }
}

/// `GET /students`
pub async fn list<R>(State(state): State<AppState<R>>) -> Result<ListResponse, ApiError>
where
    R: StudentRepository + Send + Sync + 'static,
{
    let students = state.student_service.list_students().await?;
    let body = students
        .into_iter()
        .map(|student| StudentResponse::new(student, state.schema))
        .collect();
    Ok(ListResponse::Ok(Json(body)))
}

/// `POST /students`
pub async fn create<R>(
    State(state): State<AppState<R>>,
    body: Result<Json<StudentRequest>, JsonRejection>,
) -> Result<CreateResponse, ApiError>
where
    R: StudentRepository + Send + Sync + 'static,
{
    let Json(body) = body?;
    let draft = body.into_draft(state.schema)?;
    let created = state.student_service.create_student(draft).await?;
    Ok(CreateResponse::Inserted(Json(InsertedBody {
        inserted_id: created.id.to_string(),
    })))
}

/// `PUT /students/:id`
///
/// Answers `200` whether or not a record matched `id`.
pub async fn update<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
    body: Result<Json<StudentRequest>, JsonRejection>,
) -> Result<MessageResponse, ApiError>
where
    R: StudentRepository + Send + Sync + 'static,
{
    let student_id: StudentId = id.parse()?;
    let Json(body) = body?;
    let patch = body.into_patch(state.schema);
    state
        .student_service
        .update_student(student_id, patch)
        .await?;
    Ok(MessageResponse::Updated)
}

/// `DELETE /students/:id`
///
/// Answers `200` whether or not a record matched `id`.
pub async fn delete<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<MessageResponse, ApiError>
where
    R: StudentRepository + Send + Sync + 'static,
{
    let student_id: StudentId = id.parse()?;
    state.student_service.delete_student(student_id).await?;
    Ok(MessageResponse::Deleted)
}
