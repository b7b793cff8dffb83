use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

/// A per-field validation failure. Validation collects every failure
/// before reporting, so the form layer can flag all problems in one
/// pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[serde(tag = "kind", rename_all = "snake_case")]
#[ts(export)]
pub enum ValidationError {
    #[error("{field}: value is required")]
    Missing { field: String },

    #[error("{field}: '{input}' is not a number")]
    NotNumeric { field: String, input: String },

    #[error("{field}: expected a yes/no value")]
    NotBoolean { field: String },

    #[error("{field}: {value} is outside range [{min}, {max}]")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("{field}: '{input}' is not an allowed value")]
    InvalidEnumValue {
        field: String,
        input: String,
        allowed: Vec<String>,
    },
}

impl ValidationError {
    /// The field this error belongs to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Missing { field }
            | ValidationError::NotNumeric { field, .. }
            | ValidationError::NotBoolean { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidEnumValue { field, .. } => field,
        }
    }
}
