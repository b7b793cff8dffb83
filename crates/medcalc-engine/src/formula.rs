use medcalc_core::{Clip, Expr, Rounding};

use crate::error::DomainError;
use crate::score::predicate_holds;
use crate::validate::ValidatedInputs;

/// Evaluate a closed-form formula: expression tree, then clip, then
/// round.
pub fn formula(
    expr: &Expr,
    clip: Option<Clip>,
    rounding: Rounding,
    inputs: &ValidatedInputs,
) -> Result<f64, DomainError> {
    let mut value = eval(expr, inputs)?;
    if let Some(clip) = clip {
        value = value.clamp(clip.lo, clip.hi);
    }
    Ok(round(value, rounding))
}

fn eval(expr: &Expr, inputs: &ValidatedInputs) -> Result<f64, DomainError> {
    match expr {
        Expr::Const(c) => Ok(*c),
        Expr::Field {
            name,
            floor,
            ceiling,
        } => {
            let value = inputs
                .number(name)
                .ok_or_else(|| DomainError::MissingOperand {
                    field: name.clone(),
                })?;
            clamp_operand(value, *floor, *ceiling)
        }
        Expr::Sum(terms) => terms.iter().try_fold(0.0, |acc, t| Ok(acc + eval(t, inputs)?)),
        Expr::Product(factors) => factors
            .iter()
            .try_fold(1.0, |acc, f| Ok(acc * eval(f, inputs)?)),
        Expr::Quotient { num, den } => Ok(eval(num, inputs)? / eval(den, inputs)?),
        Expr::Ln(inner) => {
            let operand = eval(inner, inputs)?;
            if operand <= 0.0 {
                return Err(DomainError::NonPositiveLogInput { value: operand });
            }
            Ok(operand.ln())
        }
        Expr::Branch {
            field,
            when,
            then,
            otherwise,
        } => {
            let value = inputs.get(field).ok_or_else(|| DomainError::MissingOperand {
                field: field.clone(),
            })?;
            if predicate_holds(when, value) {
                eval(then, inputs)
            } else {
                eval(otherwise, inputs)
            }
        }
        Expr::Choose { field, arms } => {
            let value = inputs.get(field).ok_or_else(|| DomainError::MissingOperand {
                field: field.clone(),
            })?;
            arms.iter()
                .find(|arm| predicate_holds(&arm.when, value))
                .map(|arm| arm.value)
                .ok_or_else(|| DomainError::NoMatchingBreakpoint {
                    field: field.clone(),
                    value: value.as_number().unwrap_or(f64::NAN),
                })
        }
    }
}

/// Apply a field's declared floor and ceiling. A value in `(0, floor)`
/// is silently raised to the floor; a value `<= 0` cannot be floored
/// and is rejected here rather than reaching a logarithm.
fn clamp_operand(value: f64, floor: Option<f64>, ceiling: Option<f64>) -> Result<f64, DomainError> {
    let mut value = value;
    if let Some(floor) = floor {
        if value <= 0.0 {
            return Err(DomainError::NonPositiveLogInput { value });
        }
        if value < floor {
            value = floor;
        }
    }
    if let Some(ceiling) = ceiling
        && value > ceiling
    {
        value = ceiling;
    }
    Ok(value)
}

fn round(value: f64, rounding: Rounding) -> f64 {
    match rounding {
        Rounding::None => value,
        // Round half up, matching the published instruments.
        Rounding::HalfUpInteger => (value + 0.5).floor(),
        // Past 15 places f64 cannot represent the difference anyway,
        // and the cast to i32 must stay in range.
        Rounding::Decimals(places) if places > 15 => value,
        Rounding::Decimals(places) => {
            let scale = 10f64.powi(places as i32);
            (value * scale + 0.5).floor() / scale
        }
    }
}
