//! medcalc-core
//!
//! Declarative model for clinical score calculators. Pure data — no
//! evaluation logic. A calculator is a `RuleDefinition`: its input
//! fields, one scoring method, and the ordered interpretation bands.

pub mod band;
pub mod error;
pub mod field;
pub mod method;
pub mod outcome;
pub mod rule;
pub mod value;

pub use band::{Band, Bound};
pub use error::ValidationError;
pub use field::{FieldKind, FieldSpec, NumRange};
pub use method::{
    ChooseArm, Clip, Expr, LogisticTerm, LookupTable, PointItem, Predicate, Predictor, Rounding,
    ScoringMethod, TableRow,
};
pub use outcome::Outcome;
pub use rule::RuleDefinition;
pub use value::{RawValue, TypedValue};
