//! Conversion between domain records and BSON documents.

use mongodb::bson::oid::ObjectId;
use mongodb::bson::{Bson, Document, doc};

use registrar_domain::id::StudentId;
use registrar_domain::schema::Schema;
use registrar_domain::student::{Student, StudentDraft, StudentPatch};

use crate::error::StorageError;

pub(crate) const ID: &str = "_id";

pub(crate) fn object_id(id: StudentId) -> ObjectId {
    ObjectId::from_bytes(id.bytes())
}

pub(crate) fn student_id(oid: ObjectId) -> StudentId {
    StudentId::from_bytes(oid.bytes())
}

/// Filter matching the single document with `id`.
pub(crate) fn by_id(id: StudentId) -> Document {
    doc! { "_id": object_id(id) }
}

/// Document to insert. `_id` is left out so the store assigns it.
pub(crate) fn from_draft(draft: &StudentDraft, schema: Schema) -> Document {
    let mut document = Document::new();
    document.insert(Schema::NAME, draft.name.as_str());
    if let Some(age) = draft.age {
        document.insert(Schema::AGE, age);
    }
    if let Some(text) = &draft.text {
        document.insert(schema.text_key(), text.as_str());
    }
    document
}

/// `$set` update touching only the fields present in `patch`.
pub(crate) fn from_patch(patch: &StudentPatch, schema: Schema) -> Document {
    let mut set = Document::new();
    if let Some(name) = &patch.name {
        set.insert(Schema::NAME, name.as_str());
    }
    if let Some(age) = patch.age {
        set.insert(Schema::AGE, age);
    }
    if let Some(text) = &patch.text {
        set.insert(schema.text_key(), text.as_str());
    }
    doc! { "$set": set }
}

/// Decode a stored document, failing on any field of the wrong type.
pub(crate) fn to_student(document: &Document, schema: Schema) -> Result<Student, StorageError> {
    let oid = match document.get(ID) {
        Some(Bson::ObjectId(oid)) => *oid,
        _ => return Err(malformed(document, ID, "is not an object id")),
    };

    let name = match document.get(Schema::NAME) {
        Some(Bson::String(name)) => name.clone(),
        Some(_) => return Err(malformed(document, Schema::NAME, "is not a string")),
        None => return Err(malformed(document, Schema::NAME, "is missing")),
    };

    let age = match document.get(Schema::AGE) {
        None | Some(Bson::Null) => None,
        Some(Bson::Int32(age)) => Some(*age),
        Some(Bson::Int64(age)) => Some(
            i32::try_from(*age).map_err(|_| malformed(document, Schema::AGE, "is out of range"))?,
        ),
        Some(Bson::Double(age)) => match integral_age(*age) {
            Some(age) => Some(age),
            None => return Err(malformed(document, Schema::AGE, "is not an integer")),
        },
        Some(_) => return Err(malformed(document, Schema::AGE, "is not an integer")),
    };

    let text_key = schema.text_key();
    let text = match document.get(text_key) {
        None | Some(Bson::Null) => None,
        Some(Bson::String(text)) => Some(text.clone()),
        Some(_) => return Err(malformed(document, text_key, "is not a string")),
    };

    Ok(Student {
        id: student_id(oid),
        name,
        age,
        text,
    })
}

/// Shells and most drivers store `30` as a double.
#[allow(clippy::cast_possible_truncation)]
fn integral_age(value: f64) -> Option<i32> {
    let in_range = (f64::from(i32::MIN)..=f64::from(i32::MAX)).contains(&value);
    (in_range && value.fract() == 0.0).then_some(value as i32)
}

fn malformed(document: &Document, field: &'static str, reason: &'static str) -> StorageError {
    let id = match document.get(ID) {
        Some(Bson::ObjectId(oid)) => oid.to_hex(),
        Some(other) => other.to_string(),
        None => "<no id>".to_string(),
    };
    StorageError::Decode { id, field, reason }
}
