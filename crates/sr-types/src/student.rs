use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{TypeError, TypeResult};

/// A student record as it is stored in world state.
///
/// The record is written verbatim as the value for key = `id`. Field order
/// in the JSON encoding is `id`, `name`, `degree`, `gpa`.
///
/// Decoding is lenient to match records written by other chaincode
/// runtimes: absent fields take their zero value, and the capitalized
/// field names (`ID`, `Name`, `Degree`, `GPA`) are accepted.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Student {
    #[serde(alias = "ID", alias = "Id")]
    pub id: String,
    #[serde(alias = "Name")]
    pub name: String,
    #[serde(alias = "Degree")]
    pub degree: String,
    #[serde(alias = "GPA", alias = "Gpa")]
    pub gpa: f32,
}

impl Student {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        degree: impl Into<String>,
        gpa: f32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            degree: degree.into(),
            gpa,
        }
    }

    /// Copy of this record with only the GPA replaced.
    pub fn with_gpa(&self, gpa: f32) -> Self {
        Self {
            gpa,
            ..self.clone()
        }
    }

    /// Encode as the JSON bytes written to world state.
    ///
    /// Fails for non-finite GPA values, which serde_json would otherwise
    /// silently write as `null`.
    pub fn to_json_bytes(&self) -> TypeResult<Vec<u8>> {
        if !self.gpa.is_finite() {
            return Err(TypeError::UnsupportedGpa(self.gpa));
        }
        serde_json::to_vec(self).map_err(|e| TypeError::Serialization(e.to_string()))
    }

    /// Decode a record previously written by [`Student::to_json_bytes`].
    pub fn from_json_bytes(bytes: &[u8]) -> TypeResult<Self> {
        serde_json::from_slice(bytes).map_err(|e| TypeError::Serialization(e.to_string()))
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} ({}, GPA {:.2})",
            self.id, self.name, self.degree, self.gpa
        )
    }
}
