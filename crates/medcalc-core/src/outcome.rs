use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::band::Band;
use crate::error::ValidationError;

/// The UI-facing result of one evaluation: a classified score or the
/// full set of field errors. Mutually exclusive — there is no partial
/// success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(tag = "status", rename_all = "snake_case")]
#[ts(export)]
pub enum Outcome {
    Scored { raw_score: f64, band: Band },
    Invalid { errors: Vec<ValidationError> },
}
