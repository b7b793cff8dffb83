use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The type of value a field collects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    Integer,
    Float,
    Boolean,
    /// One of a fixed set of named choices.
    Enum,
}

/// Inclusive numeric range for a field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NumRange {
    pub min: f64,
    pub max: f64,
}

impl NumRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

/// One input field of a calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    /// Required for numeric kinds; `None` for boolean and enum kinds.
    pub range: Option<NumRange>,
    /// Non-empty for enum kinds; empty otherwise.
    pub allowed_values: Vec<String>,
    pub required: bool,
    /// Display-only; never used in computation.
    pub unit: Option<String>,
}

impl FieldSpec {
    pub fn integer(name: &str, min: f64, max: f64) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::Integer,
            range: Some(NumRange::new(min, max)),
            allowed_values: Vec::new(),
            required: true,
            unit: None,
        }
    }

    pub fn float(name: &str, min: f64, max: f64) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::Float,
            range: Some(NumRange::new(min, max)),
            allowed_values: Vec::new(),
            required: true,
            unit: None,
        }
    }

    pub fn boolean(name: &str) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::Boolean,
            range: None,
            allowed_values: Vec::new(),
            required: true,
            unit: None,
        }
    }

    pub fn choice(name: &str, allowed: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            kind: FieldKind::Enum,
            range: None,
            allowed_values: allowed.iter().map(|s| s.to_string()).collect(),
            required: true,
            unit: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }
}
