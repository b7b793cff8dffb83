use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Raw input as the form layer supplies it: free text or a checkbox
/// state. An absent map key means the field was left empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RawValue {
    Text(String),
    Bool(bool),
}

impl RawValue {
    pub fn text(s: &str) -> Self {
        RawValue::Text(s.to_string())
    }
}

/// A typed, range-checked value produced by validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TypedValue {
    Int(i64),
    Float(f64),
    Bool(bool),
    Choice(String),
}

impl TypedValue {
    /// Numeric view. Booleans and choices have no numeric value.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            TypedValue::Int(i) => Some(*i as f64),
            TypedValue::Float(f) => Some(*f),
            TypedValue::Bool(_) | TypedValue::Choice(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            TypedValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_choice(&self) -> Option<&str> {
        match self {
            TypedValue::Choice(c) => Some(c),
            _ => None,
        }
    }
}
