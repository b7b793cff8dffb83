use medcalc_core::{
    Band, Bound, FieldSpec, LogisticTerm, Predicate, Predictor, RuleDefinition, ScoringMethod,
    TableRow,
};

/// EuroSCORE-style logistic model for cardiac surgery mortality:
/// `risk = 100 · e^z / (1 + e^z)` over a linear predictor built from
/// the published coefficient table. Output is a percentage, not a
/// point count.
pub fn definition() -> RuleDefinition {
    RuleDefinition {
        id: "cardiac_surgery_risk".to_string(),
        name: "Cardiac Surgery Risk".to_string(),
        fields: vec![
            FieldSpec::integer("age", 18.0, 110.0).with_unit("years"),
            FieldSpec::choice("sex", &["male", "female"]),
            FieldSpec::boolean("copd"),
            FieldSpec::boolean("unstable_angina"),
            FieldSpec::boolean("recent_mi"),
            FieldSpec::boolean("emergency"),
        ],
        method: ScoringMethod::Logistic {
            intercept: -4.79,
            terms: vec![
                LogisticTerm {
                    coefficient: 0.0666,
                    // One unit at 60 or under, one more per started
                    // five-year step above 60.
                    input: Predictor::Bucketed {
                        field: "age".to_string(),
                        rows: vec![
                            TableRow::new(18.0, 61.0, 1.0),
                            TableRow::new(61.0, 66.0, 2.0),
                            TableRow::new(66.0, 71.0, 3.0),
                            TableRow::new(71.0, 76.0, 4.0),
                            TableRow::new(76.0, 81.0, 5.0),
                            TableRow::new(81.0, 86.0, 6.0),
                            TableRow::new(86.0, 111.0, 7.0),
                        ],
                    },
                },
                indicator("sex", Predicate::Eq("female".to_string()), 0.33),
                indicator("copd", Predicate::IsTrue, 0.49),
                indicator("unstable_angina", Predicate::IsTrue, 0.57),
                indicator("recent_mi", Predicate::IsTrue, 0.55),
                indicator("emergency", Predicate::IsTrue, 0.71),
            ],
        },
        bands: vec![
            Band::new(
                Bound::inclusive(0.0),
                Bound::exclusive(2.0),
                "Low risk",
                0,
                "Predicted operative mortality below 2%",
            ),
            Band::new(
                Bound::inclusive(2.0),
                Bound::exclusive(5.0),
                "Intermediate risk",
                1,
                "Predicted operative mortality 2-5%",
            ),
            Band::new(
                Bound::inclusive(5.0),
                Bound::inclusive(100.0),
                "High risk",
                2,
                "Predicted operative mortality above 5%; heart-team review",
            ),
        ],
    }
}

fn indicator(field: &str, when: Predicate, coefficient: f64) -> LogisticTerm {
    LogisticTerm {
        coefficient,
        input: Predictor::Indicator {
            field: field.to_string(),
            when,
        },
    }
}
