//! Reference patients for each catalog instrument, checked against the
//! published point totals.

use std::collections::BTreeMap;

use medcalc_catalog::registry;
use medcalc_core::{Outcome, RawValue};
use medcalc_engine::Registry;

fn raw(entries: &[(&str, RawValue)]) -> BTreeMap<String, RawValue> {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.clone()))
        .collect()
}

fn catalog() -> Registry {
    registry().expect("catalog should load")
}

#[test]
fn catalog_loads_with_every_rule() {
    let registry = catalog();
    let ids: Vec<&str> = registry.ids().collect();
    for id in [
        "bishop",
        "cardiac_surgery_risk",
        "cha2ds2_vasc",
        "cockcroft_gault",
        "grace",
        "meld",
        "neuro_coordination",
        "neuro_disability",
        "neuro_motor",
        "neuro_sensory",
        "wells_pe",
    ] {
        assert!(ids.contains(&id), "missing rule '{id}'");
    }
}

#[test]
fn cockcroft_gault_reference_patient() {
    // (140 − 60) × 70 / (72 × 1.0) = 77.8 mL/min for a male patient.
    let evaluation = catalog()
        .evaluate(
            "cockcroft_gault",
            &raw(&[
                ("age", RawValue::text("60")),
                ("weight", RawValue::text("70")),
                ("creatinine", RawValue::text("1.0")),
                ("sex", RawValue::text("male")),
            ]),
        )
        .expect("should score");
    assert!((evaluation.raw_score - 77.8).abs() < 1e-9);
    assert_eq!(evaluation.band.label, "Mildly decreased");
}

#[test]
fn cockcroft_gault_female_factor() {
    let evaluation = catalog()
        .evaluate(
            "cockcroft_gault",
            &raw(&[
                ("age", RawValue::text("60")),
                ("weight", RawValue::text("70")),
                ("creatinine", RawValue::text("1.0")),
                ("sex", RawValue::text("female")),
            ]),
        )
        .expect("should score");
    // 77.78 × 0.85 = 66.11, reported to one decimal.
    assert!((evaluation.raw_score - 66.1).abs() < 1e-9);
}

#[test]
fn meld_reference_patient() {
    // 9.57·ln(1.5) + 3.78·ln(2.0) + 11.2·ln(1.3) + 6.43 ≈ 15.87 → 16.
    let evaluation = catalog()
        .evaluate(
            "meld",
            &raw(&[
                ("creatinine", RawValue::text("1.5")),
                ("bilirubin", RawValue::text("2.0")),
                ("inr", RawValue::text("1.3")),
                ("dialysis", RawValue::Bool(false)),
            ]),
        )
        .expect("should score");
    assert_eq!(evaluation.raw_score, 16.0);
    assert_eq!(evaluation.band.label, "Moderate severity");
}

#[test]
fn meld_dialysis_sets_creatinine_to_four() {
    let registry = catalog();
    let on_dialysis = registry
        .evaluate(
            "meld",
            &raw(&[
                ("creatinine", RawValue::text("1.0")),
                ("bilirubin", RawValue::text("2.0")),
                ("inr", RawValue::text("1.3")),
                ("dialysis", RawValue::Bool(true)),
            ]),
        )
        .expect("should score");
    let at_cap = registry
        .evaluate(
            "meld",
            &raw(&[
                ("creatinine", RawValue::text("4.0")),
                ("bilirubin", RawValue::text("2.0")),
                ("inr", RawValue::text("1.3")),
                ("dialysis", RawValue::Bool(false)),
            ]),
        )
        .expect("should score");
    assert_eq!(on_dialysis.raw_score, at_cap.raw_score);
}

#[test]
fn meld_low_values_floor_to_minimum_score() {
    let evaluation = catalog()
        .evaluate(
            "meld",
            &raw(&[
                ("creatinine", RawValue::text("0.8")),
                ("bilirubin", RawValue::text("0.5")),
                ("inr", RawValue::text("0.9")),
                ("dialysis", RawValue::Bool(false)),
            ]),
        )
        .expect("should score");
    // Every log term floors to ln(1) = 0, leaving the 6.43 constant,
    // which rounds half-up to 6 inside the [6, 40] clip.
    assert_eq!(evaluation.raw_score, 6.0);
    assert_eq!(evaluation.band.label, "Low severity");
}

#[test]
fn cha2ds2_vasc_reference_patient() {
    // Age ≥ 75 (+2), female (+1), diabetes (+1), hypertension (+1) = 5.
    let evaluation = catalog()
        .evaluate(
            "cha2ds2_vasc",
            &raw(&[
                ("age", RawValue::text("80")),
                ("sex", RawValue::text("female")),
                ("chf", RawValue::Bool(false)),
                ("hypertension", RawValue::Bool(true)),
                ("diabetes", RawValue::Bool(true)),
                ("stroke_or_tia", RawValue::Bool(false)),
                ("vascular_disease", RawValue::Bool(false)),
            ]),
        )
        .expect("should score");
    assert_eq!(evaluation.raw_score, 5.0);
    assert_eq!(evaluation.band.label, "High risk");
}

#[test]
fn cha2ds2_vasc_age_bands_are_exclusive_of_each_other() {
    let registry = catalog();
    let score_at_age = |age: &str| {
        registry
            .evaluate(
                "cha2ds2_vasc",
                &raw(&[
                    ("age", RawValue::text(age)),
                    ("sex", RawValue::text("male")),
                    ("chf", RawValue::Bool(false)),
                    ("hypertension", RawValue::Bool(false)),
                    ("diabetes", RawValue::Bool(false)),
                    ("stroke_or_tia", RawValue::Bool(false)),
                    ("vascular_disease", RawValue::Bool(false)),
                ]),
            )
            .expect("should score")
            .raw_score
    };
    assert_eq!(score_at_age("64"), 0.0);
    assert_eq!(score_at_age("65"), 1.0);
    assert_eq!(score_at_age("74"), 1.0);
    // 75 moves into the two-point band, not both bands at once.
    assert_eq!(score_at_age("75"), 2.0);
}

#[test]
fn grace_reference_patient() {
    // Age 65 (58) + HR 90 (15) + SBP 110 (43) + creatinine 1.0 (7)
    // + Killip II (20) + ST deviation (28) + elevated enzymes (14) = 185.
    let evaluation = catalog()
        .evaluate(
            "grace",
            &raw(&[
                ("age", RawValue::text("65")),
                ("heart_rate", RawValue::text("90")),
                ("systolic_bp", RawValue::text("110")),
                ("creatinine", RawValue::text("1.0")),
                ("killip_class", RawValue::text("II")),
                ("cardiac_arrest", RawValue::Bool(false)),
                ("st_deviation", RawValue::Bool(true)),
                ("elevated_enzymes", RawValue::Bool(true)),
            ]),
        )
        .expect("should score");
    assert_eq!(evaluation.raw_score, 185.0);
    assert_eq!(evaluation.band.label, "High risk");
}

#[test]
fn grace_categorical_components_add_published_points() {
    let registry = catalog();
    let score_with = |killip: &str, arrest: bool| {
        registry
            .evaluate(
                "grace",
                &raw(&[
                    ("age", RawValue::text("65")),
                    ("heart_rate", RawValue::text("90")),
                    ("systolic_bp", RawValue::text("110")),
                    ("creatinine", RawValue::text("1.0")),
                    ("killip_class", RawValue::text(killip)),
                    ("cardiac_arrest", RawValue::Bool(arrest)),
                    ("st_deviation", RawValue::Bool(false)),
                    ("elevated_enzymes", RawValue::Bool(false)),
                ]),
            )
            .expect("should score")
            .raw_score
    };
    // Numeric tables alone: 58 + 15 + 43 + 7 = 123.
    assert_eq!(score_with("I", false), 123.0);
    assert_eq!(score_with("IV", false), 123.0 + 59.0);
    assert_eq!(score_with("I", true), 123.0 + 39.0);
}

#[test]
fn wells_pe_band_boundaries() {
    let registry = catalog();
    // DVT signs + PE most likely = 6.0, the inclusive top of "moderate".
    let moderate = registry
        .evaluate(
            "wells_pe",
            &raw(&[
                ("clinical_dvt_signs", RawValue::Bool(true)),
                ("pe_most_likely", RawValue::Bool(true)),
                ("heart_rate", RawValue::text("80")),
                ("immobilization_or_surgery", RawValue::Bool(false)),
                ("previous_dvt_pe", RawValue::Bool(false)),
                ("hemoptysis", RawValue::Bool(false)),
                ("malignancy", RawValue::Bool(false)),
            ]),
        )
        .expect("should score");
    assert_eq!(moderate.raw_score, 6.0);
    assert_eq!(moderate.band.label, "Moderate probability");

    // Tachycardia adds 1.5 and crosses the exclusive lower bound of "high".
    let high = registry
        .evaluate(
            "wells_pe",
            &raw(&[
                ("clinical_dvt_signs", RawValue::Bool(true)),
                ("pe_most_likely", RawValue::Bool(true)),
                ("heart_rate", RawValue::text("120")),
                ("immobilization_or_surgery", RawValue::Bool(false)),
                ("previous_dvt_pe", RawValue::Bool(false)),
                ("hemoptysis", RawValue::Bool(false)),
                ("malignancy", RawValue::Bool(false)),
            ]),
        )
        .expect("should score");
    assert_eq!(high.raw_score, 7.5);
    assert_eq!(high.band.label, "High probability");
}

#[test]
fn bishop_favorable_starts_at_eight_inclusive() {
    let registry = catalog();
    // 2 + 3 + 2 + 1 + 0 = 8.
    let at_cutoff = registry
        .evaluate(
            "bishop",
            &raw(&[
                ("dilation", RawValue::text("3-4 cm")),
                ("effacement", RawValue::text("80%+")),
                ("station", RawValue::text("-1/0")),
                ("consistency", RawValue::text("medium")),
                ("position", RawValue::text("posterior")),
            ]),
        )
        .expect("should score");
    assert_eq!(at_cutoff.raw_score, 8.0);
    assert_eq!(at_cutoff.band.label, "Favorable");

    // One point lower sits in the intermediate band.
    let below = registry
        .evaluate(
            "bishop",
            &raw(&[
                ("dilation", RawValue::text("3-4 cm")),
                ("effacement", RawValue::text("80%+")),
                ("station", RawValue::text("-1/0")),
                ("consistency", RawValue::text("firm")),
                ("position", RawValue::text("posterior")),
            ]),
        )
        .expect("should score");
    assert_eq!(below.raw_score, 7.0);
    assert_eq!(below.band.label, "Intermediate");
}

#[test]
fn cardiac_surgery_risk_logistic_transform() {
    let evaluation = catalog()
        .evaluate(
            "cardiac_surgery_risk",
            &raw(&[
                ("age", RawValue::text("50")),
                ("sex", RawValue::text("male")),
                ("copd", RawValue::Bool(false)),
                ("unstable_angina", RawValue::Bool(false)),
                ("recent_mi", RawValue::Bool(false)),
                ("emergency", RawValue::Bool(false)),
            ]),
        )
        .expect("should score");
    let z: f64 = -4.79 + 0.0666;
    let expected = 100.0 * z.exp() / (1.0 + z.exp());
    assert!((evaluation.raw_score - expected).abs() < 1e-9);
    assert_eq!(evaluation.band.label, "Low risk");
}

#[test]
fn neuro_disability_override_component_dominates() {
    // Motor 4 + assistance = 5, above the override threshold: the
    // composite equals that sub-score, not a blend of the set.
    let evaluation = catalog()
        .evaluate(
            "neuro_disability",
            &raw(&[
                ("motor_grade", RawValue::text("4")),
                ("assistance_required", RawValue::Bool(true)),
                ("sensory_grade", RawValue::text("2")),
                ("proprioceptive_loss", RawValue::Bool(false)),
                ("ataxia_grade", RawValue::text("1")),
                ("gait_impaired", RawValue::Bool(false)),
            ]),
        )
        .expect("should score");
    assert_eq!(evaluation.raw_score, 5.0);
    assert_eq!(evaluation.band.label, "Severe disability");
}

#[test]
fn neuro_disability_tied_maximum_escalates() {
    let evaluation = catalog()
        .evaluate(
            "neuro_disability",
            &raw(&[
                ("motor_grade", RawValue::text("4")),
                ("assistance_required", RawValue::Bool(false)),
                ("sensory_grade", RawValue::text("4")),
                ("proprioceptive_loss", RawValue::Bool(false)),
                ("ataxia_grade", RawValue::text("1")),
                ("gait_impaired", RawValue::Bool(false)),
            ]),
        )
        .expect("should score");
    assert_eq!(evaluation.raw_score, 4.5);
}

#[test]
fn outcome_reports_every_invalid_field() {
    let outcome = catalog()
        .outcome(
            "cockcroft_gault",
            &raw(&[
                ("age", RawValue::text("abc")),
                ("weight", RawValue::text("70")),
                ("creatinine", RawValue::text("0")),
                ("sex", RawValue::text("male")),
            ]),
        )
        .expect("validation failures are a regular outcome");
    let Outcome::Invalid { errors } = outcome else {
        panic!("expected invalid outcome, got {outcome:?}");
    };
    // Unparseable age and out-of-range creatinine, both reported.
    assert_eq!(errors.len(), 2);
}

#[test]
fn repeated_evaluation_yields_identical_results() {
    let registry = catalog();
    let map = raw(&[
        ("creatinine", RawValue::text("1.5")),
        ("bilirubin", RawValue::text("2.0")),
        ("inr", RawValue::text("1.3")),
        ("dialysis", RawValue::Bool(false)),
    ]);
    let first = registry.evaluate("meld", &map).expect("should score");
    let second = registry.evaluate("meld", &map).expect("should score");
    assert_eq!(first, second);
}

#[test]
fn rule_definitions_survive_serde_round_trip() {
    for rule in medcalc_catalog::all_rules() {
        let json = serde_json::to_string(&rule).expect("rule should serialize");
        let back: medcalc_core::RuleDefinition =
            serde_json::from_str(&json).expect("rule should deserialize");
        assert_eq!(rule, back);
    }
}
