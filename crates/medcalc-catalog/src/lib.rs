//! medcalc-catalog
//!
//! Calculator definitions. Pure configuration — each published
//! instrument is one `RuleDefinition` built by its own module, and the
//! whole catalog loads into a validated registry at startup.

pub mod calculators;

use medcalc_core::RuleDefinition;
use medcalc_engine::{ConfigError, Registry};

/// All rule definitions in the catalog, composite sub-rules included.
pub fn all_rules() -> Vec<RuleDefinition> {
    let mut rules = vec![
        calculators::cha2ds2_vasc::definition(),
        calculators::wells_pe::definition(),
        calculators::cockcroft_gault::definition(),
        calculators::meld::definition(),
        calculators::grace::definition(),
        calculators::bishop::definition(),
        calculators::cardiac_surgery_risk::definition(),
    ];
    rules.extend(calculators::neuro_disability::definitions());
    rules
}

/// Build the validated registry over the full catalog.
pub fn registry() -> Result<Registry, ConfigError> {
    Registry::new(all_rules())
}
