use medcalc_core::{
    Band, Bound, Expr, FieldSpec, Predicate, Rounding, RuleDefinition, ScoringMethod,
};

/// Neurological disability index: an EDSS-style composite over three
/// functional-subsystem sub-scores (motor, sensory, coordination).
///
/// Each subsystem scores a clinician-assigned grade 0–5 plus one point
/// for its aggravating finding, giving 0–6 per subsystem. The index is
/// the worst subsystem score, with two refinements: a subsystem above
/// grade 4 dominates outright, and a tie at the maximum escalates by
/// half a step when at least as many subsystems sit at grade 2 or
/// above.
pub fn definitions() -> Vec<RuleDefinition> {
    vec![
        subsystem(
            "neuro_motor",
            "Motor Function",
            "motor_grade",
            "assistance_required",
        ),
        subsystem(
            "neuro_sensory",
            "Sensory Function",
            "sensory_grade",
            "proprioceptive_loss",
        ),
        subsystem(
            "neuro_coordination",
            "Coordination",
            "ataxia_grade",
            "gait_impaired",
        ),
        composite(),
    ]
}

fn subsystem(id: &str, name: &str, grade_field: &str, aggravator: &str) -> RuleDefinition {
    RuleDefinition {
        id: id.to_string(),
        name: name.to_string(),
        fields: vec![
            FieldSpec::integer(grade_field, 0.0, 5.0),
            FieldSpec::boolean(aggravator),
        ],
        method: ScoringMethod::Formula {
            expr: Expr::Sum(vec![
                Expr::field(grade_field),
                Expr::branch(
                    aggravator,
                    Predicate::IsTrue,
                    Expr::Const(1.0),
                    Expr::Const(0.0),
                ),
            ]),
            clip: None,
            rounding: Rounding::None,
        },
        bands: vec![
            Band::new(
                Bound::inclusive(0.0),
                Bound::exclusive(2.0),
                "Minimal impairment",
                0,
                "No functional limitation",
            ),
            Band::new(
                Bound::inclusive(2.0),
                Bound::exclusive(4.0),
                "Moderate impairment",
                1,
                "Function limited but independent",
            ),
            Band::new(
                Bound::inclusive(4.0),
                Bound::inclusive(6.0),
                "Severe impairment",
                2,
                "Function substantially lost",
            ),
        ],
    }
}

fn composite() -> RuleDefinition {
    RuleDefinition {
        id: "neuro_disability".to_string(),
        name: "Neurological Disability Index".to_string(),
        // The composite collects no fields of its own; each subsystem
        // validates its slice of the shared input map.
        fields: vec![],
        method: ScoringMethod::Composite {
            components: vec![
                "neuro_motor".to_string(),
                "neuro_sensory".to_string(),
                "neuro_coordination".to_string(),
            ],
            override_threshold: 4.0,
            secondary_threshold: 2.0,
            tie_increment: 0.5,
        },
        bands: vec![
            Band::new(
                Bound::inclusive(0.0),
                Bound::exclusive(2.0),
                "No significant disability",
                0,
                "Fully ambulatory, self-sufficient",
            ),
            Band::new(
                Bound::inclusive(2.0),
                Bound::exclusive(4.0),
                "Moderate disability",
                1,
                "Impairment in one or more functional systems",
            ),
            Band::new(
                Bound::inclusive(4.0),
                Bound::inclusive(6.0),
                "Severe disability",
                2,
                "Assistance required for daily activity",
            ),
        ],
    }
}
