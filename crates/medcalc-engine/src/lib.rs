//! medcalc-engine
//!
//! Deterministic evaluation pipeline for clinical calculators:
//! raw input → validator → score evaluator → band classifier. The
//! pipeline is synchronous and pure; rule definitions are read-only
//! after registry load, and every invocation allocates its own result.

pub mod bands;
pub mod error;
pub mod formula;
pub mod registry;
pub mod score;
pub mod validate;

pub use error::{ClassificationError, ConfigError, DomainError, EvalError};
pub use registry::{Evaluation, Registry};
pub use validate::{ValidatedInputs, validate};
