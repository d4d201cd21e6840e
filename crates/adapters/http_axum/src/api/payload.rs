//! Request and response bodies for student records.
//!
//! Both text keys are declared on the wire types; the configured [`Schema`]
//! decides which one is read on input and written on output.

use serde::{Deserialize, Serialize};

use registrar_domain::error::ValidationError;
use registrar_domain::schema::{Schema, TextField};
use registrar_domain::student::{Student, StudentDraft, StudentPatch};

/// Request body for creating or updating a student.
///
/// `null` decodes as an absent field. Unknown fields, including a body
/// `id`, are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct StudentRequest {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub email: Option<String>,
    pub grade: Option<String>,
}

impl StudentRequest {
    fn into_fields(self, schema: Schema) -> (Option<String>, Option<i32>, Option<String>) {
        let text = match schema.text_field {
            TextField::Email => self.email,
            TextField::Grade => self.grade,
        };
        (self.name, self.age, text)
    }

    /// Convert into a create payload. `name` is required.
    pub fn into_draft(self, schema: Schema) -> Result<StudentDraft, ValidationError> {
        let (name, age, text) = self.into_fields(schema);
        let name =
            name.ok_or_else(|| ValidationError::InvalidBody("missing field `name`".to_string()))?;
        Ok(StudentDraft { name, age, text })
    }

    /// Convert into an update payload. Every field is optional.
    #[must_use]
    pub fn into_patch(self, schema: Schema) -> StudentPatch {
        let (name, age, text) = self.into_fields(schema);
        StudentPatch { name, age, text }
    }
}

/// Response representation of a stored student.
#[derive(Debug, Serialize)]
pub struct StudentResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grade: Option<String>,
}

impl StudentResponse {
    /// Encode a stored record under the schema's text key.
    #[must_use]
    pub fn new(student: Student, schema: Schema) -> Self {
        let (email, grade) = match schema.text_field {
            TextField::Email => (student.text, None),
            TextField::Grade => (None, student.text),
        };
        Self {
            id: student.id.to_string(),
            name: student.name,
            age: student.age,
            email,
            grade,
        }
    }
}
