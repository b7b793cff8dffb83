use medcalc_core::{Band, NumRange};
use tracing::warn;

use crate::error::{ClassificationError, ConfigError};

/// Find the unique band containing `score`, honoring each band's own
/// declared edge inclusivity. A miss is a configuration defect and is
/// reported, never rounded to the nearest band.
pub fn classify<'a>(
    rule_id: &str,
    score: f64,
    bands: &'a [Band],
) -> Result<&'a Band, ClassificationError> {
    match bands.iter().find(|b| b.contains(score)) {
        Some(band) => Ok(band),
        None => {
            warn!(rule.id = rule_id, score, "score matched no band");
            Err(ClassificationError {
                rule_id: rule_id.to_string(),
                score,
            })
        }
    }
}

/// Check that `bands` cover `attainable` with no gap: the first band
/// reaches the minimum, the last reaches the maximum, and each pair of
/// neighbors abuts at one shared value with exactly one side inclusive.
///
/// Coverage is a configuration policy, enforced by the test suite
/// rather than at registry load; a gap that survives to runtime
/// surfaces as a `ClassificationError`.
pub fn verify_coverage(
    rule_id: &str,
    bands: &[Band],
    attainable: NumRange,
) -> Result<(), ConfigError> {
    let Some(first) = bands.first() else {
        return Err(ConfigError::UncoveredEdge {
            rule_id: rule_id.to_string(),
            value: attainable.min,
        });
    };
    if !first.contains(attainable.min) {
        return Err(ConfigError::UncoveredEdge {
            rule_id: rule_id.to_string(),
            value: attainable.min,
        });
    }

    for pair in bands.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let abuts = a.upper.value == b.lower.value && (a.upper.inclusive != b.lower.inclusive);
        if !abuts {
            return Err(ConfigError::BandGap {
                rule_id: rule_id.to_string(),
                first: a.label.clone(),
                second: b.label.clone(),
            });
        }
    }

    let last = bands.last().unwrap_or(first);
    if !last.contains(attainable.max) {
        return Err(ConfigError::UncoveredEdge {
            rule_id: rule_id.to_string(),
            value: attainable.max,
        });
    }
    Ok(())
}
