use medcalc_core::{LogisticTerm, LookupTable, PointItem, Predicate, Predictor, TypedValue};

use crate::error::DomainError;
use crate::validate::ValidatedInputs;

/// Weighted indicator sum: `Σ points_i · indicator(when_i)`.
///
/// A predicate over an absent optional field simply does not fire;
/// required fields are guaranteed present by validation.
pub fn point_sum(items: &[PointItem], inputs: &ValidatedInputs) -> f64 {
    items
        .iter()
        .filter(|item| {
            inputs
                .get(&item.field)
                .is_some_and(|v| predicate_holds(&item.when, v))
        })
        .map(|item| item.points)
        .sum()
}

/// Piecewise table lookup: `Σ lookup_i(field_i)` over per-field
/// breakpoint tables of half-open `[from, to)` rows, plus any
/// categorical additions scored as indicators.
pub fn table_sum(
    tables: &[LookupTable],
    additions: &[PointItem],
    inputs: &ValidatedInputs,
) -> Result<f64, DomainError> {
    let mut total = 0.0;
    for table in tables {
        let value = inputs
            .number(&table.field)
            .ok_or_else(|| DomainError::MissingOperand {
                field: table.field.clone(),
            })?;
        total += lookup(table, value)?;
    }
    Ok(total + point_sum(additions, inputs))
}

/// Logistic transform of a linear predictor:
/// `100 · e^z / (1 + e^z)` with `z = intercept + Σ β_i · x_i`.
pub fn logistic(
    intercept: f64,
    terms: &[LogisticTerm],
    inputs: &ValidatedInputs,
) -> Result<f64, DomainError> {
    let mut z = intercept;
    for term in terms {
        z += term.coefficient * predictor_value(&term.input, inputs)?;
    }
    // e^(-z) underflows to 0 for large z where e^z would overflow.
    Ok(100.0 / (1.0 + (-z).exp()))
}

fn predictor_value(input: &Predictor, inputs: &ValidatedInputs) -> Result<f64, DomainError> {
    match input {
        Predictor::Value { field } => {
            inputs
                .number(field)
                .ok_or_else(|| DomainError::MissingOperand {
                    field: field.clone(),
                })
        }
        Predictor::Indicator { field, when } => Ok(inputs
            .get(field)
            .is_some_and(|v| predicate_holds(when, v)) as u8 as f64),
        Predictor::Bucketed { field, rows } => {
            let value = inputs
                .number(field)
                .ok_or_else(|| DomainError::MissingOperand {
                    field: field.clone(),
                })?;
            rows.iter()
                .find(|r| value >= r.from && value < r.to)
                .map(|r| r.points)
                .ok_or_else(|| DomainError::NoMatchingBreakpoint {
                    field: field.clone(),
                    value,
                })
        }
    }
}

fn lookup(table: &LookupTable, value: f64) -> Result<f64, DomainError> {
    table
        .rows
        .iter()
        .find(|r| value >= r.from && value < r.to)
        .map(|r| r.points)
        .ok_or_else(|| DomainError::NoMatchingBreakpoint {
            field: table.field.clone(),
            value,
        })
}

/// Whether a predicate holds for one typed value. Numeric comparisons
/// are closed intervals, with no implicit rounding.
pub(crate) fn predicate_holds(when: &Predicate, value: &TypedValue) -> bool {
    match when {
        Predicate::IsTrue => value.as_bool() == Some(true),
        Predicate::Eq(choice) => value.as_choice() == Some(choice.as_str()),
        Predicate::AtLeast(min) => value.as_number().is_some_and(|v| v >= *min),
        Predicate::AtMost(max) => value.as_number().is_some_and(|v| v <= *max),
        Predicate::Between { lo, hi } => value.as_number().is_some_and(|v| v >= *lo && v <= *hi),
    }
}
