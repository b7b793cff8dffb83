use std::collections::BTreeMap;

use medcalc_core::{FieldKind, FieldSpec, RawValue, TypedValue, ValidationError};

/// An immutable, range-checked map from field name to typed value.
/// Only a successful [`validate`] run can construct one; evaluators
/// never see unchecked input.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInputs {
    values: BTreeMap<String, TypedValue>,
}

impl ValidatedInputs {
    pub fn get(&self, name: &str) -> Option<&TypedValue> {
        self.values.get(name)
    }

    pub fn number(&self, name: &str) -> Option<f64> {
        self.values.get(name).and_then(TypedValue::as_number)
    }

    pub fn boolean(&self, name: &str) -> Option<bool> {
        self.values.get(name).and_then(TypedValue::as_bool)
    }

    pub fn choice(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(TypedValue::as_choice)
    }
}

/// Check a raw input map against a rule's field specs.
///
/// Every field is checked independently and every failure reported;
/// validation never stops at the first problem. Per-field order:
/// presence, parseability, range membership (inclusive).
pub fn validate(
    fields: &[FieldSpec],
    raw: &BTreeMap<String, RawValue>,
) -> Result<ValidatedInputs, Vec<ValidationError>> {
    let mut values = BTreeMap::new();
    let mut errors = Vec::new();

    for spec in fields {
        match check_field(spec, raw.get(&spec.name)) {
            Ok(Some(value)) => {
                values.insert(spec.name.clone(), value);
            }
            Ok(None) => {}
            Err(e) => errors.push(e),
        }
    }

    if errors.is_empty() {
        Ok(ValidatedInputs { values })
    } else {
        Err(errors)
    }
}

fn check_field(
    spec: &FieldSpec,
    raw: Option<&RawValue>,
) -> Result<Option<TypedValue>, ValidationError> {
    let raw = match raw {
        Some(RawValue::Text(t)) if t.trim().is_empty() => None,
        other => other,
    };
    let Some(raw) = raw else {
        if spec.required {
            return Err(ValidationError::Missing {
                field: spec.name.clone(),
            });
        }
        return Ok(None);
    };

    match spec.kind {
        FieldKind::Integer => parse_integer(spec, raw).map(Some),
        FieldKind::Float => parse_float(spec, raw).map(Some),
        FieldKind::Boolean => parse_boolean(spec, raw).map(Some),
        FieldKind::Enum => parse_choice(spec, raw).map(Some),
    }
}

fn parse_integer(spec: &FieldSpec, raw: &RawValue) -> Result<TypedValue, ValidationError> {
    let text = match raw {
        RawValue::Text(t) => t.trim(),
        RawValue::Bool(b) => {
            return Err(not_numeric(spec, &b.to_string()));
        }
    };
    let value: i64 = text.parse().map_err(|_| not_numeric(spec, text))?;
    check_range(spec, value as f64)?;
    Ok(TypedValue::Int(value))
}

fn parse_float(spec: &FieldSpec, raw: &RawValue) -> Result<TypedValue, ValidationError> {
    let text = match raw {
        RawValue::Text(t) => t.trim(),
        RawValue::Bool(b) => {
            return Err(not_numeric(spec, &b.to_string()));
        }
    };
    let value: f64 = text.parse().map_err(|_| not_numeric(spec, text))?;
    if !value.is_finite() {
        return Err(not_numeric(spec, text));
    }
    check_range(spec, value)?;
    Ok(TypedValue::Float(value))
}

fn parse_boolean(spec: &FieldSpec, raw: &RawValue) -> Result<TypedValue, ValidationError> {
    match raw {
        RawValue::Bool(b) => Ok(TypedValue::Bool(*b)),
        // Some form controls serialize checkbox state as text.
        RawValue::Text(t) => match t.trim() {
            "true" => Ok(TypedValue::Bool(true)),
            "false" => Ok(TypedValue::Bool(false)),
            _ => Err(ValidationError::NotBoolean {
                field: spec.name.clone(),
            }),
        },
    }
}

fn parse_choice(spec: &FieldSpec, raw: &RawValue) -> Result<TypedValue, ValidationError> {
    let input = match raw {
        RawValue::Text(t) => t.trim().to_string(),
        RawValue::Bool(b) => b.to_string(),
    };
    if spec.allowed_values.iter().any(|v| *v == input) {
        Ok(TypedValue::Choice(input))
    } else {
        Err(ValidationError::InvalidEnumValue {
            field: spec.name.clone(),
            input,
            allowed: spec.allowed_values.clone(),
        })
    }
}

fn check_range(spec: &FieldSpec, value: f64) -> Result<(), ValidationError> {
    if let Some(range) = spec.range
        && !range.contains(value)
    {
        return Err(ValidationError::OutOfRange {
            field: spec.name.clone(),
            value,
            min: range.min,
            max: range.max,
        });
    }
    Ok(())
}

fn not_numeric(spec: &FieldSpec, input: &str) -> ValidationError {
    ValidationError::NotNumeric {
        field: spec.name.clone(),
        input: input.to_string(),
    }
}
