//! Student — the single record type managed by the service.

use crate::error::{RegistrarError, ValidationError};
use crate::id::StudentId;

/// A stored student record.
///
/// `text` holds the schema-configured attribute (see
/// [`Schema`](crate::schema::Schema)); its key is not part of the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: StudentId,
    pub name: String,
    pub age: Option<i32>,
    pub text: Option<String>,
}

/// A record that has not been stored yet and therefore has no identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentDraft {
    pub name: String,
    pub age: Option<i32>,
    pub text: Option<String>,
}

impl StudentDraft {
    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarError::Validation`] when `name` is blank.
    pub fn validate(&self) -> Result<(), RegistrarError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Attach the identifier the store assigned on insert.
    #[must_use]
    pub fn into_student(self, id: StudentId) -> Student {
        Student {
            id,
            name: self.name,
            age: self.age,
            text: self.text,
        }
    }
}

/// A partial update. Only the fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub age: Option<i32>,
    pub text: Option<String>,
}

impl StudentPatch {
    /// `true` when the patch would not modify anything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.age.is_none() && self.text.is_none()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`RegistrarError::Validation`] when the patch is empty or
    /// sets a blank `name`.
    pub fn validate(&self) -> Result<(), RegistrarError> {
        if self.is_empty() {
            return Err(ValidationError::EmptyPatch.into());
        }
        if self.name.as_deref().is_some_and(|name| name.trim().is_empty()) {
            return Err(ValidationError::EmptyName.into());
        }
        Ok(())
    }

    /// Apply the patch to a record in place, leaving absent fields untouched.
    pub fn apply(&self, student: &mut Student) {
        if let Some(name) = &self.name {
            student.name.clone_from(name);
        }
        if let Some(age) = self.age {
            student.age = Some(age);
        }
        if let Some(text) = &self.text {
            student.text = Some(text.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> StudentDraft {
        StudentDraft {
            name: "Ada".to_string(),
            age: Some(30),
            text: Some("ada@x.com".to_string()),
        }
    }

    fn id() -> StudentId {
        StudentId::from_bytes([7; 12])
    }

    #[test]
    fn should_accept_draft_with_name() {
        assert!(draft().validate().is_ok());
    }

    #[test]
    fn should_reject_draft_when_name_is_blank() {
        let mut draft = draft();
        draft.name = "   ".to_string();
        assert!(matches!(
            draft.validate(),
            Err(RegistrarError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_keep_fields_when_converting_draft() {
        let student = draft().into_student(id());
        assert_eq!(student.id, id());
        assert_eq!(student.name, "Ada");
        assert_eq!(student.age, Some(30));
        assert_eq!(student.text.as_deref(), Some("ada@x.com"));
    }

    #[test]
    fn should_reject_empty_patch() {
        assert!(matches!(
            StudentPatch::default().validate(),
            Err(RegistrarError::Validation(ValidationError::EmptyPatch))
        ));
    }

    #[test]
    fn should_reject_patch_with_blank_name() {
        let patch = StudentPatch {
            name: Some(String::new()),
            ..StudentPatch::default()
        };
        assert!(matches!(
            patch.validate(),
            Err(RegistrarError::Validation(ValidationError::EmptyName))
        ));
    }

    #[test]
    fn should_only_overwrite_present_fields_when_applying() {
        let mut student = draft().into_student(id());
        let patch = StudentPatch {
            age: Some(31),
            ..StudentPatch::default()
        };
        assert!(patch.validate().is_ok());

        patch.apply(&mut student);

        assert_eq!(student.age, Some(31));
        assert_eq!(student.name, "Ada");
        assert_eq!(student.text.as_deref(), Some("ada@x.com"));
        assert_eq!(student.id, id());
    }
}
