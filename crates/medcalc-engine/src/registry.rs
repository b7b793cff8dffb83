use std::collections::BTreeMap;

use medcalc_core::{Band, FieldKind, Outcome, RawValue, RuleDefinition, ScoringMethod};
use tracing::debug;

use crate::bands;
use crate::error::{ConfigError, EvalError};
use crate::formula;
use crate::score;
use crate::validate;

/// A classified score: the raw evaluator output plus the band it fell
/// into. Freshly allocated per invocation; never cached.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluation {
    pub raw_score: f64,
    pub band: Band,
}

/// Owns every loaded rule definition for the process lifetime.
/// Construction validates field invariants, band ordering, and that
/// composite references resolve and form a DAG; rules are read-only
/// afterwards, so evaluation needs no locking.
#[derive(Debug)]
pub struct Registry {
    rules: BTreeMap<String, RuleDefinition>,
}

impl Registry {
    pub fn new(rules: Vec<RuleDefinition>) -> Result<Self, ConfigError> {
        let mut map = BTreeMap::new();
        for rule in rules {
            check_fields(&rule)?;
            check_bands(&rule)?;
            if let Some(previous) = map.insert(rule.id.clone(), rule) {
                return Err(ConfigError::DuplicateRule(previous.id));
            }
        }
        let registry = Self { rules: map };
        registry.check_references()?;
        Ok(registry)
    }

    pub fn get(&self, id: &str) -> Option<&RuleDefinition> {
        self.rules.get(id)
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.rules.keys().map(String::as_str)
    }

    /// Run the full pipeline for one rule: validate, score, classify.
    pub fn evaluate(
        &self,
        id: &str,
        raw: &BTreeMap<String, RawValue>,
    ) -> Result<Evaluation, EvalError> {
        let rule = self
            .rules
            .get(id)
            .ok_or_else(|| EvalError::UnknownRule(id.to_string()))?;
        self.evaluate_rule(rule, raw)
    }

    /// UI-facing shape of [`Registry::evaluate`]: validation failures
    /// fold into `Outcome::Invalid`; domain and classification defects
    /// stay errors.
    pub fn outcome(
        &self,
        id: &str,
        raw: &BTreeMap<String, RawValue>,
    ) -> Result<Outcome, EvalError> {
        match self.evaluate(id, raw) {
            Ok(evaluation) => Ok(Outcome::Scored {
                raw_score: evaluation.raw_score,
                band: evaluation.band,
            }),
            Err(EvalError::Invalid(errors)) => Ok(Outcome::Invalid { errors }),
            Err(other) => Err(other),
        }
    }

    fn evaluate_rule(
        &self,
        rule: &RuleDefinition,
        raw: &BTreeMap<String, RawValue>,
    ) -> Result<Evaluation, EvalError> {
        let inputs = validate::validate(&rule.fields, raw).map_err(EvalError::Invalid)?;

        let raw_score = match &rule.method {
            ScoringMethod::PointSum { items } => score::point_sum(items, &inputs),
            ScoringMethod::TableSum { tables, additions } => {
                score::table_sum(tables, additions, &inputs)?
            }
            ScoringMethod::Formula {
                expr,
                clip,
                rounding,
            } => formula::formula(expr, *clip, *rounding, &inputs)?,
            ScoringMethod::Logistic { intercept, terms } => {
                score::logistic(*intercept, terms, &inputs)?
            }
            ScoringMethod::Composite {
                components,
                override_threshold,
                secondary_threshold,
                tie_increment,
            } => self.composite(
                raw,
                components,
                *override_threshold,
                *secondary_threshold,
                *tie_increment,
            )?,
        };

        let band = bands::classify(&rule.id, raw_score, &rule.bands)?.clone();
        debug!(rule.id = %rule.id, raw_score, band = %band.label, "evaluated");
        Ok(Evaluation { raw_score, band })
    }

    /// Evaluate each component sub-rule against the caller's raw map,
    /// then aggregate under the override policy: the maximum sub-score
    /// wins outright above the override threshold; below it, a tie at
    /// the maximum escalates by the tie increment only when at least as
    /// many sub-scores sit at or above the secondary threshold.
    fn composite(
        &self,
        raw: &BTreeMap<String, RawValue>,
        components: &[String],
        override_threshold: f64,
        secondary_threshold: f64,
        tie_increment: f64,
    ) -> Result<f64, EvalError> {
        let mut scores = Vec::with_capacity(components.len());
        let mut errors = Vec::new();

        for id in components {
            let sub = self
                .rules
                .get(id)
                .ok_or_else(|| EvalError::UnknownRule(id.clone()))?;
            match self.evaluate_rule(sub, raw) {
                Ok(evaluation) => scores.push(evaluation.raw_score),
                Err(EvalError::Invalid(sub_errors)) => {
                    // Components may share fields; report each field once.
                    for e in sub_errors {
                        if !errors.contains(&e) {
                            errors.push(e);
                        }
                    }
                }
                Err(other) => return Err(other),
            }
        }
        if !errors.is_empty() {
            return Err(EvalError::Invalid(errors));
        }

        let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if best > override_threshold {
            return Ok(best);
        }
        let tied = scores.iter().filter(|s| **s == best).count();
        if tied >= 2 {
            let high = scores.iter().filter(|s| **s >= secondary_threshold).count();
            if high >= tied {
                return Ok(best + tie_increment);
            }
        }
        Ok(best)
    }

    /// Composite references must resolve and form a DAG. Cycles are a
    /// load-time rejection, never an evaluation-time surprise.
    fn check_references(&self) -> Result<(), ConfigError> {
        #[derive(Clone, Copy, PartialEq)]
        enum Mark {
            Visiting,
            Done,
        }

        fn visit(
            registry: &Registry,
            id: &str,
            marks: &mut BTreeMap<String, Mark>,
        ) -> Result<(), ConfigError> {
            match marks.get(id).copied() {
                Some(Mark::Done) => return Ok(()),
                Some(Mark::Visiting) => {
                    return Err(ConfigError::CyclicReference(id.to_string()));
                }
                None => {}
            }
            marks.insert(id.to_string(), Mark::Visiting);
            if let Some(rule) = registry.rules.get(id)
                && let ScoringMethod::Composite { components, .. } = &rule.method
            {
                for reference in components {
                    if !registry.rules.contains_key(reference) {
                        return Err(ConfigError::UnknownReference {
                            rule_id: id.to_string(),
                            reference: reference.clone(),
                        });
                    }
                    visit(registry, reference, marks)?;
                }
            }
            marks.insert(id.to_string(), Mark::Done);
            Ok(())
        }

        for (id, rule) in &self.rules {
            if let ScoringMethod::Composite { components, .. } = &rule.method
                && components.is_empty()
            {
                return Err(ConfigError::EmptyComposite {
                    rule_id: id.clone(),
                });
            }
        }

        let mut marks = BTreeMap::new();
        for id in self.rules.keys() {
            visit(self, id, &mut marks)?;
        }
        Ok(())
    }
}

fn check_fields(rule: &RuleDefinition) -> Result<(), ConfigError> {
    for field in &rule.fields {
        match field.kind {
            FieldKind::Integer | FieldKind::Float => match field.range {
                None => {
                    return Err(ConfigError::MissingRange {
                        rule_id: rule.id.clone(),
                        field: field.name.clone(),
                    });
                }
                Some(range) if range.min > range.max => {
                    return Err(ConfigError::InvertedRange {
                        rule_id: rule.id.clone(),
                        field: field.name.clone(),
                    });
                }
                Some(_) => {}
            },
            FieldKind::Enum => {
                if field.allowed_values.is_empty() {
                    return Err(ConfigError::EmptyEnum {
                        rule_id: rule.id.clone(),
                        field: field.name.clone(),
                    });
                }
            }
            FieldKind::Boolean => {}
        }
    }
    Ok(())
}

/// Bands must be ascending and pairwise non-overlapping. Coverage gaps
/// are a policy lint (`bands::verify_coverage`), not a load failure.
fn check_bands(rule: &RuleDefinition) -> Result<(), ConfigError> {
    for band in &rule.bands {
        let empty = band.lower.value > band.upper.value
            || (band.lower.value == band.upper.value
                && !(band.lower.inclusive && band.upper.inclusive));
        if empty {
            return Err(ConfigError::InvertedBand {
                rule_id: rule.id.clone(),
                label: band.label.clone(),
            });
        }
    }
    for pair in rule.bands.windows(2) {
        let (a, b) = (&pair[0], &pair[1]);
        let disjoint = b.lower.value > a.upper.value
            || (b.lower.value == a.upper.value && !(b.lower.inclusive && a.upper.inclusive));
        if !disjoint {
            return Err(ConfigError::OverlappingBands {
                rule_id: rule.id.clone(),
                first: a.label.clone(),
                second: b.label.clone(),
            });
        }
    }
    Ok(())
}
