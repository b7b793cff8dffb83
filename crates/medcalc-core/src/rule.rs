use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::band::Band;
use crate::field::FieldSpec;
use crate::method::ScoringMethod;

/// The declarative description of one scoring instrument: its input
/// fields, one scoring method, and the ordered interpretation bands.
/// Loaded once at startup and immutable thereafter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RuleDefinition {
    /// Unique identifier (e.g. "cha2ds2_vasc", "meld").
    pub id: String,
    /// Human-readable name (e.g. "CHA₂DS₂-VASc", "MELD").
    pub name: String,
    pub fields: Vec<FieldSpec>,
    pub method: ScoringMethod,
    /// Ascending, pairwise non-overlapping. Coverage of the attainable
    /// score range is a configuration policy, checked in testing.
    pub bands: Vec<Band>,
}
