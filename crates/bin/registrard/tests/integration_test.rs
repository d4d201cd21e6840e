//! End-to-end tests for the full registrard stack.
//!
//! Each test spins up the real service and the real axum router over a
//! repository and exercises the HTTP layer via `tower::ServiceExt::oneshot` —
//! no TCP port is bound. Most tests use an in-process store; the test at the
//! bottom runs the same scenario against a live `MongoDB` and is ignored
//! unless `REGISTRAR_TEST_DATABASE_URL` is provided.

use std::sync::Mutex;
use std::sync::atomic::{AtomicU8, Ordering};
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use registrar_adapter_http_axum::router;
use registrar_adapter_http_axum::state::AppState;
use registrar_app::ports::StudentRepository;
use registrar_app::services::student_service::StudentService;
use registrar_domain::error::RegistrarError;
use registrar_domain::id::StudentId;
use registrar_domain::schema::{Schema, TextField};
use registrar_domain::student::{Student, StudentDraft, StudentPatch};
use tower::ServiceExt;

/// Store stand-in that assigns identifiers the way the document store does:
/// on insert, never taken from the caller.
#[derive(Default)]
struct InProcessStore {
    records: Mutex<Vec<Student>>,
    next: AtomicU8,
}

impl StudentRepository for InProcessStore {
    async fn create(&self, draft: StudentDraft) -> Result<Student, RegistrarError> {
        let mut bytes = [0xab; 12];
        bytes[11] = self.next.fetch_add(1, Ordering::SeqCst);
        let student = draft.into_student(StudentId::from_bytes(bytes));
        self.records.lock().unwrap().push(student.clone());
        Ok(student)
    }

    async fn get_all(&self) -> Result<Vec<Student>, RegistrarError> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn update(&self, id: StudentId, patch: StudentPatch) -> Result<u64, RegistrarError> {
        let mut records = self.records.lock().unwrap();
        Ok(match records.iter_mut().find(|s| s.id == id) {
            Some(student) => {
                patch.apply(student);
                1
            }
            None => 0,
        })
    }

    async fn delete(&self, id: StudentId) -> Result<u64, RegistrarError> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|s| s.id != id);
        Ok(u64::from(before != records.len()))
    }
}

fn app_with<R>(repo: R, schema: Schema) -> axum::Router
where
    R: StudentRepository + Send + Sync + 'static,
{
    router::build(AppState::new(StudentService::new(repo), schema))
}

fn app() -> axum::Router {
    app_with(InProcessStore::default(), Schema::default())
}

fn request(method: &str, uri: &str, body: Option<String>) -> Request<Body> {
    let builder = Request::builder().method(method).uri(uri);
    match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}

async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<&str>,
) -> (StatusCode, serde_json::Value) {
    let resp = app
        .clone()
        .oneshot(request(method, uri, body.map(str::to_string)))
        .await
        .unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };
    (status, body)
}

/// Runs the documented lifecycle: create, list, partial update, delete.
async fn assert_student_lifecycle(app: &axum::Router) {
    // Create
    let (status, body) = send(
        app,
        "POST",
        "/students",
        Some(r#"{"name":"Ada","age":30,"email":"ada@x.com"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let id = body["inserted_id"].as_str().unwrap().to_string();
    assert_eq!(id.len(), 24);

    // List shows every submitted field
    let (status, body) = send(app, "GET", "/students", None).await;
    assert_eq!(status, StatusCode::OK);
    let ada = body
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["id"] == id.as_str())
        .unwrap()
        .clone();
    assert_eq!(ada["name"], "Ada");
    assert_eq!(ada["age"], 30);
    assert_eq!(ada["email"], "ada@x.com");

    // Partial update
    let (status, body) = send(
        app,
        "PUT",
        &format!("/students/{id}"),
        Some(r#"{"age":31}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Student updated");

    let (_, body) = send(app, "GET", "/students", None).await;
    let ada = body
        .as_array()
        .unwrap()
        .iter()
        .find(|s| s["id"] == id.as_str())
        .unwrap()
        .clone();
    assert_eq!(ada["age"], 31);
    assert_eq!(ada["name"], "Ada");
    assert_eq!(ada["email"], "ada@x.com");

    // Delete
    let (status, body) = send(app, "DELETE", &format!("/students/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Student deleted");

    let (_, body) = send(app, "GET", "/students", None).await;
    assert!(
        body.as_array()
            .unwrap()
            .iter()
            .all(|s| s["id"] != id.as_str())
    );
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app().oneshot(request("GET", "/health", None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// API: student lifecycle
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_student_lifecycle() {
    assert_student_lifecycle(&app()).await;
}

#[tokio::test]
async fn should_return_empty_array_when_collection_is_empty() {
    let (status, body) = send(&app(), "GET", "/students", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn should_succeed_when_deleting_same_id_twice() {
    let app = app();
    let (_, body) = send(&app, "POST", "/students", Some(r#"{"name":"Bob"}"#)).await;
    let id = body["inserted_id"].as_str().unwrap().to_string();

    let (first, _) = send(&app, "DELETE", &format!("/students/{id}"), None).await;
    let (second, _) = send(&app, "DELETE", &format!("/students/{id}"), None).await;

    assert_eq!(first, StatusCode::OK);
    assert_eq!(second, StatusCode::OK);
}

#[tokio::test]
async fn should_keep_other_fields_when_updating_only_name() {
    let app = app();
    let (_, body) = send(
        &app,
        "POST",
        "/students",
        Some(r#"{"name":"Ada","age":30,"email":"ada@x.com"}"#),
    )
    .await;
    let id = body["inserted_id"].as_str().unwrap().to_string();

    let (status, _) = send(
        &app,
        "PUT",
        &format!("/students/{id}"),
        Some(r#"{"name":"Ada Lovelace","id":"ffffffffffffffffffffffff"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/students", None).await;
    assert_eq!(body[0]["id"], id.as_str());
    assert_eq!(body[0]["name"], "Ada Lovelace");
    assert_eq!(body[0]["age"], 30);
    assert_eq!(body[0]["email"], "ada@x.com");
}

#[tokio::test]
async fn should_not_insert_when_create_body_is_malformed() {
    let app = app();

    let (status, body) = send(
        &app,
        "POST",
        "/students",
        Some(r#"{"name":"Ada","age":"thirty"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("age"));

    let (_, body) = send(&app, "GET", "/students", None).await;
    assert_eq!(body, serde_json::json!([]));
}

#[tokio::test]
async fn should_reject_invalid_id_on_update_and_delete() {
    let app = app();

    let (status, _) = send(&app, "PUT", "/students/42", Some(r#"{"age":1}"#)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, body) = send(&app, "DELETE", "/students/xyz", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().starts_with("invalid id"));
}

#[tokio::test]
async fn should_use_grade_field_when_schema_is_grade() {
    let app = app_with(InProcessStore::default(), Schema::new(TextField::Grade));

    let (status, _) = send(
        &app,
        "POST",
        "/students",
        Some(r#"{"name":"Cy","age":12,"grade":"7th","email":"ignored@x.com"}"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, "GET", "/students", None).await;
    assert_eq!(body[0]["grade"], "7th");
    assert!(body[0].get("email").is_none());
}

// ---------------------------------------------------------------------------
// Live document store
// ---------------------------------------------------------------------------

#[tokio::test]
#[ignore = "requires a running MongoDB; set REGISTRAR_TEST_DATABASE_URL"]
async fn should_complete_student_lifecycle_against_mongodb() {
    let uri = std::env::var("REGISTRAR_TEST_DATABASE_URL")
        .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());
    let db = registrar_adapter_storage_mongodb::Config {
        uri,
        database: "registrar_test".to_string(),
        collection: format!("students_{}", std::process::id()),
        connect_timeout: Duration::from_secs(10),
        schema: Schema::default(),
    }
    .build()
    .await
    .expect("test database should be reachable");

    let app = app_with(db.students(), Schema::default());
    assert_student_lifecycle(&app).await;

    db.collection().drop().await.unwrap();
}
