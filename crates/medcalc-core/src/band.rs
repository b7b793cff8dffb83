use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One edge of a band's interval. Inclusivity is declared per edge;
/// there is no uniform half-open convention across instruments.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Bound {
    pub value: f64,
    pub inclusive: bool,
}

impl Bound {
    pub fn inclusive(value: f64) -> Self {
        Self {
            value,
            inclusive: true,
        }
    }

    pub fn exclusive(value: f64) -> Self {
        Self {
            value,
            inclusive: false,
        }
    }
}

/// A labeled sub-interval of a scoring domain mapped to a clinical
/// interpretation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Band {
    pub lower: Bound,
    pub upper: Bound,
    pub label: String,
    /// Ordinal severity, 0 = least severe.
    pub severity_tier: u8,
    pub guidance: String,
}

impl Band {
    pub fn new(lower: Bound, upper: Bound, label: &str, severity_tier: u8, guidance: &str) -> Self {
        Self {
            lower,
            upper,
            label: label.to_string(),
            severity_tier,
            guidance: guidance.to_string(),
        }
    }

    pub fn contains(&self, score: f64) -> bool {
        let above = if self.lower.inclusive {
            score >= self.lower.value
        } else {
            score > self.lower.value
        };
        let below = if self.upper.inclusive {
            score <= self.upper.value
        } else {
            score < self.upper.value
        };
        above && below
    }
}
