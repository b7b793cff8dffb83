use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Comparison applied to one validated field value. Numeric comparisons
/// are closed intervals; there is no implicit rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Predicate {
    IsTrue,
    Eq(String),
    AtLeast(f64),
    AtMost(f64),
    Between { lo: f64, hi: f64 },
}

/// One scored criterion of a point-scale instrument.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PointItem {
    pub field: String,
    pub when: Predicate,
    pub points: f64,
}

/// Half-open row `[from, to)` of a lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TableRow {
    pub from: f64,
    pub to: f64,
    pub points: f64,
}

impl TableRow {
    pub fn new(from: f64, to: f64, points: f64) -> Self {
        Self { from, to, points }
    }
}

/// Ordered breakpoint table for one field. Must be exhaustive over the
/// field's declared range; an unmatched value is a domain error, not a
/// silent zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LookupTable {
    pub field: String,
    pub rows: Vec<TableRow>,
}

impl LookupTable {
    pub fn new(field: &str, rows: Vec<TableRow>) -> Self {
        Self {
            field: field.to_string(),
            rows,
        }
    }
}

/// Final clipping bounds for a closed-form formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Clip {
    pub lo: f64,
    pub hi: f64,
}

/// Rounding applied after clipping. Half-up, matching the published
/// instruments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Rounding {
    None,
    HalfUpInteger,
    Decimals(u32),
}

/// One arm of a per-field factor selection (e.g. a sex factor).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ChooseArm {
    pub when: Predicate,
    pub value: f64,
}

/// Closed-form arithmetic over validated fields.
///
/// `Field` may declare a floor and/or ceiling applied before the value
/// enters the expression: a value in `(0, floor)` is raised to the
/// floor; a value `<= 0` under a floor cannot be raised and is a
/// domain error when it reaches `Ln`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Expr {
    Const(f64),
    Field {
        name: String,
        floor: Option<f64>,
        ceiling: Option<f64>,
    },
    Sum(Vec<Expr>),
    Product(Vec<Expr>),
    Quotient {
        num: Box<Expr>,
        den: Box<Expr>,
    },
    Ln(Box<Expr>),
    Choose {
        field: String,
        arms: Vec<ChooseArm>,
    },
    /// Two-way conditional on one field (e.g. a dialysis override that
    /// replaces the creatinine term).
    Branch {
        field: String,
        when: Predicate,
        then: Box<Expr>,
        otherwise: Box<Expr>,
    },
}

impl Expr {
    pub fn field(name: &str) -> Self {
        Expr::Field {
            name: name.to_string(),
            floor: None,
            ceiling: None,
        }
    }

    pub fn field_clamped(name: &str, floor: Option<f64>, ceiling: Option<f64>) -> Self {
        Expr::Field {
            name: name.to_string(),
            floor,
            ceiling,
        }
    }

    pub fn ln(inner: Expr) -> Self {
        Expr::Ln(Box::new(inner))
    }

    pub fn quotient(num: Expr, den: Expr) -> Self {
        Expr::Quotient {
            num: Box::new(num),
            den: Box::new(den),
        }
    }

    pub fn branch(field: &str, when: Predicate, then: Expr, otherwise: Expr) -> Self {
        Expr::Branch {
            field: field.to_string(),
            when,
            then: Box::new(then),
            otherwise: Box::new(otherwise),
        }
    }
}

/// Per-field input to a logistic linear predictor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Predictor {
    /// The field value itself.
    Value { field: String },
    /// 1.0 when the predicate holds, else 0.0.
    Indicator { field: String, when: Predicate },
    /// The field value bucketed through a breakpoint table.
    Bucketed { field: String, rows: Vec<TableRow> },
}

/// One `β_i · x_i` term of a logistic model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LogisticTerm {
    pub coefficient: f64,
    pub input: Predictor,
}

/// The scoring method of a calculator. Exactly one variant per rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "type", rename_all = "snake_case")]
#[ts(export)]
pub enum ScoringMethod {
    /// `Σ points_i · indicator(when_i)`.
    PointSum { items: Vec<PointItem> },
    /// `Σ lookup_i(field_i)` over per-field breakpoint tables, plus
    /// point-sum style additions for categorical components (Killip
    /// class, admission findings) folded into the same total.
    TableSum {
        tables: Vec<LookupTable>,
        additions: Vec<PointItem>,
    },
    /// Direct arithmetic, optionally clipped then rounded.
    Formula {
        expr: Expr,
        clip: Option<Clip>,
        rounding: Rounding,
    },
    /// `100 · e^z / (1 + e^z)` over a linear predictor `z`.
    Logistic {
        intercept: f64,
        terms: Vec<LogisticTerm>,
    },
    /// Override aggregation of independently scored sub-rules. The only
    /// variant that consults the registry.
    ///
    /// Let `best` be the maximum sub-score. If `best` exceeds
    /// `override_threshold` the composite equals `best` outright.
    /// Otherwise the composite is `best`, escalated by `tie_increment`
    /// when two or more sub-scores tie at `best` and at least that many
    /// sit at or above `secondary_threshold`.
    Composite {
        components: Vec<String>,
        override_threshold: f64,
        secondary_threshold: f64,
        tie_increment: f64,
    },
}
