//! Store-native record identifier.
//!
//! Identifiers are assigned by the document store, never by the
//! application. The wire form is the 24-character hexadecimal rendering
//! of the 12 raw bytes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Number of raw bytes in an identifier.
pub const ID_LEN: usize = 12;

/// Unique identifier for a [`Student`](crate::student::Student).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StudentId([u8; ID_LEN]);

impl StudentId {
    /// Wrap raw identifier bytes handed back by the store.
    #[must_use]
    pub fn from_bytes(bytes: [u8; ID_LEN]) -> Self {
        Self(bytes)
    }

    /// Access the raw identifier bytes.
    #[must_use]
    pub fn bytes(self) -> [u8; ID_LEN] {
        self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for StudentId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut bytes = [0u8; ID_LEN];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| ValidationError::InvalidId {
            value: s.to_string(),
        })?;
        Ok(Self(bytes))
    }
}

impl Serialize for StudentId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for StudentId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
