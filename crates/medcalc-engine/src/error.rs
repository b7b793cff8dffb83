use thiserror::Error;

use medcalc_core::ValidationError;

/// Validated inputs that are individually in range but jointly
/// undefined for the scoring method. Aborts the single evaluation;
/// engine state is untouched.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("{field}: no breakpoint row matches {value}")]
    NoMatchingBreakpoint { field: String, value: f64 },

    #[error("logarithm input {value} is not positive and cannot be floored")]
    NonPositiveLogInput { value: f64 },

    #[error("{field}: no value available for formula operand")]
    MissingOperand { field: String },
}

/// A raw score matched no band. Always a rule-configuration defect
/// (incomplete band coverage), never a user-input problem.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("rule '{rule_id}': score {score} matches no band")]
pub struct ClassificationError {
    pub rule_id: String,
    pub score: f64,
}

/// Everything a single evaluation can fail with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    #[error("validation failed for {} field(s)", .0.len())]
    Invalid(Vec<ValidationError>),

    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Classification(#[from] ClassificationError),

    #[error("unknown rule: {0}")]
    UnknownRule(String),
}

/// Defects in rule configuration, rejected when the registry loads.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("duplicate rule id '{0}'")]
    DuplicateRule(String),

    #[error("rule '{rule_id}': field '{field}' has min > max")]
    InvertedRange { rule_id: String, field: String },

    #[error("rule '{rule_id}': numeric field '{field}' declares no range")]
    MissingRange { rule_id: String, field: String },

    #[error("rule '{rule_id}': enum field '{field}' has no allowed values")]
    EmptyEnum { rule_id: String, field: String },

    #[error("rule '{rule_id}': band '{label}' has lower bound above upper bound")]
    InvertedBand { rule_id: String, label: String },

    #[error("rule '{rule_id}': bands '{first}' and '{second}' are out of order or overlapping")]
    OverlappingBands {
        rule_id: String,
        first: String,
        second: String,
    },

    #[error("rule '{rule_id}': gap between bands '{first}' and '{second}'")]
    BandGap {
        rule_id: String,
        first: String,
        second: String,
    },

    #[error("rule '{rule_id}': bands do not reach attainable score {value}")]
    UncoveredEdge { rule_id: String, value: f64 },

    #[error("rule '{rule_id}': composite has no components")]
    EmptyComposite { rule_id: String },

    #[error("rule '{rule_id}' references unknown rule '{reference}'")]
    UnknownReference { rule_id: String, reference: String },

    #[error("composite reference cycle through rule '{0}'")]
    CyclicReference(String),
}
