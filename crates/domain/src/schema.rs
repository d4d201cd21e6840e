//! Record schema — the field names shared by the wire format and the store.
//!
//! Deployments differ only in the name of the free-text attribute, so the
//! choice is a value rather than a separate code path.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Which free-text attribute a deployment records for each student.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextField {
    /// Contact address, stored under `email`.
    #[default]
    Email,
    /// Class or level, stored under `grade`.
    Grade,
}

impl TextField {
    /// Field name used on the wire and in the store.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Grade => "grade",
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Error returned when parsing an unknown [`TextField`].
#[derive(Debug, thiserror::Error)]
#[error("unknown text field {0:?}, expected \"email\" or \"grade\"")]
pub struct UnknownTextField(String);

impl FromStr for TextField {
    type Err = UnknownTextField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "grade" => Ok(Self::Grade),
            _ => Err(UnknownTextField(s.to_string())),
        }
    }
}

/// Field layout of a student record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Schema {
    pub text_field: TextField,
}

impl Schema {
    /// Identifier key on the wire.
    pub const ID: &'static str = "id";
    /// Name key on the wire and in the store.
    pub const NAME: &'static str = "name";
    /// Age key on the wire and in the store.
    pub const AGE: &'static str = "age";

    #[must_use]
    pub fn new(text_field: TextField) -> Self {
        Self { text_field }
    }

    /// Key of the configured free-text attribute.
    #[must_use]
    pub fn text_key(&self) -> &'static str {
        self.text_field.key()
    }
}
