use medcalc_core::{
    Band, Bound, Clip, Expr, FieldSpec, Predicate, Rounding, RuleDefinition, ScoringMethod,
};

/// MELD (original, pre-2016 variant):
/// `9.57·ln(creatinine) + 3.78·ln(bilirubin) + 11.2·ln(INR) + 6.43`.
///
/// Inputs below 1.0 are floored to 1.0 before the logarithm;
/// creatinine is capped at 4.0 and set to 4.0 outright for patients on
/// dialysis. The result is clipped to [6, 40] and rounded half up.
pub fn definition() -> RuleDefinition {
    let creatinine_term = Expr::Product(vec![
        Expr::Const(9.57),
        Expr::branch(
            "dialysis",
            Predicate::IsTrue,
            Expr::ln(Expr::Const(4.0)),
            Expr::ln(Expr::field_clamped("creatinine", Some(1.0), Some(4.0))),
        ),
    ]);
    let bilirubin_term = Expr::Product(vec![
        Expr::Const(3.78),
        Expr::ln(Expr::field_clamped("bilirubin", Some(1.0), None)),
    ]);
    let inr_term = Expr::Product(vec![
        Expr::Const(11.2),
        Expr::ln(Expr::field_clamped("inr", Some(1.0), None)),
    ]);

    RuleDefinition {
        id: "meld".to_string(),
        name: "MELD".to_string(),
        fields: vec![
            FieldSpec::float("creatinine", 0.01, 40.0).with_unit("mg/dL"),
            FieldSpec::float("bilirubin", 0.01, 99.0).with_unit("mg/dL"),
            FieldSpec::float("inr", 0.1, 20.0),
            FieldSpec::boolean("dialysis"),
        ],
        method: ScoringMethod::Formula {
            expr: Expr::Sum(vec![
                creatinine_term,
                bilirubin_term,
                inr_term,
                Expr::Const(6.43),
            ]),
            clip: Some(Clip { lo: 6.0, hi: 40.0 }),
            rounding: Rounding::HalfUpInteger,
        },
        bands: vec![
            Band::new(
                Bound::inclusive(6.0),
                Bound::exclusive(10.0),
                "Low severity",
                0,
                "Approximately 1.9% 3-month mortality",
            ),
            Band::new(
                Bound::inclusive(10.0),
                Bound::exclusive(20.0),
                "Moderate severity",
                1,
                "Approximately 6% 3-month mortality",
            ),
            Band::new(
                Bound::inclusive(20.0),
                Bound::exclusive(30.0),
                "High severity",
                2,
                "Approximately 19.6% 3-month mortality",
            ),
            Band::new(
                Bound::inclusive(30.0),
                Bound::inclusive(40.0),
                "Very high severity",
                3,
                "Approximately 52.6% 3-month mortality; transplant priority",
            ),
        ],
    }
}
