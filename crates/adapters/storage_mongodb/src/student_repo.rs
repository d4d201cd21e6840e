//! `MongoDB` implementation of [`StudentRepository`].

use std::future::Future;

use mongodb::Collection;
use mongodb::bson::Document;

use registrar_app::ports::StudentRepository;
use registrar_domain::error::RegistrarError;
use registrar_domain::id::StudentId;
use registrar_domain::schema::Schema;
use registrar_domain::student::{Student, StudentDraft, StudentPatch};

use crate::document;
use crate::error::StorageError;

/// `MongoDB`-backed student repository.
#[derive(Debug, Clone)]
pub struct MongoStudentRepository {
    collection: Collection<Document>,
    schema: Schema,
}

impl MongoStudentRepository {
    /// Create a new repository over the given collection.
    #[must_use]
    pub fn new(collection: Collection<Document>, schema: Schema) -> Self {
        Self { collection, schema }
    }
}

impl StudentRepository for MongoStudentRepository {
    fn create(
        &self,
        draft: StudentDraft,
    ) -> impl Future<Output = Result<Student, RegistrarError>> + Send {
        let collection = self.collection.clone();
        let document = document::from_draft(&draft, self.schema);
        async move {
            let result = collection
                .insert_one(document)
                .await
                .map_err(StorageError::from)?;

            let oid = result
                .inserted_id
                .as_object_id()
                .ok_or(StorageError::UnexpectedInsertedId)?;

            Ok(draft.into_student(document::student_id(oid)))
        }
    }

    fn get_all(&self) -> impl Future<Output = Result<Vec<Student>, RegistrarError>> + Send {
        let collection = self.collection.clone();
        let schema = self.schema;
        async move {
            let mut cursor = collection
                .find(Document::new())
                .await
                .map_err(StorageError::from)?;

            let mut students = Vec::new();
            while cursor.advance().await.map_err(StorageError::from)? {
                let raw: Document = cursor.deserialize_current().map_err(StorageError::from)?;
                students.push(document::to_student(&raw, schema)?);
            }
            Ok(students)
        }
    }

    fn update(
        &self,
        id: StudentId,
        patch: StudentPatch,
    ) -> impl Future<Output = Result<u64, RegistrarError>> + Send {
        let collection = self.collection.clone();
        let update = document::from_patch(&patch, self.schema);
        async move {
            let result = collection
                .update_one(document::by_id(id), update)
                .await
                .map_err(StorageError::from)?;

            Ok(result.matched_count)
        }
    }

    fn delete(&self, id: StudentId) -> impl Future<Output = Result<u64, RegistrarError>> + Send {
        let collection = self.collection.clone();
        async move {
            let result = collection
                .delete_one(document::by_id(id))
                .await
                .map_err(StorageError::from)?;

            Ok(result.deleted_count)
        }
    }
}
