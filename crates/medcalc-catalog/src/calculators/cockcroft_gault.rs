use medcalc_core::{
    Band, Bound, ChooseArm, Expr, FieldSpec, Predicate, Rounding, RuleDefinition, ScoringMethod,
};

/// Cockcroft-Gault creatinine clearance:
/// `(140 − age) · weight / (72 · creatinine)`, × 0.85 for females.
/// Result in mL/min, reported to one decimal place.
pub fn definition() -> RuleDefinition {
    let numerator = Expr::Product(vec![
        Expr::Sum(vec![
            Expr::Const(140.0),
            Expr::Product(vec![Expr::Const(-1.0), Expr::field("age")]),
        ]),
        Expr::field("weight"),
    ]);
    let denominator = Expr::Product(vec![Expr::Const(72.0), Expr::field("creatinine")]);
    let sex_factor = Expr::Choose {
        field: "sex".to_string(),
        arms: vec![
            ChooseArm {
                when: Predicate::Eq("male".to_string()),
                value: 1.0,
            },
            ChooseArm {
                when: Predicate::Eq("female".to_string()),
                value: 0.85,
            },
        ],
    };

    RuleDefinition {
        id: "cockcroft_gault".to_string(),
        name: "Cockcroft-Gault".to_string(),
        fields: vec![
            FieldSpec::integer("age", 18.0, 120.0).with_unit("years"),
            FieldSpec::float("weight", 20.0, 300.0).with_unit("kg"),
            FieldSpec::float("creatinine", 0.1, 20.0).with_unit("mg/dL"),
            FieldSpec::choice("sex", &["male", "female"]),
        ],
        method: ScoringMethod::Formula {
            expr: Expr::Product(vec![Expr::quotient(numerator, denominator), sex_factor]),
            clip: None,
            rounding: Rounding::Decimals(1),
        },
        bands: vec![
            Band::new(
                Bound::inclusive(0.0),
                Bound::exclusive(15.0),
                "Kidney failure",
                4,
                "CrCl < 15: most renally cleared drugs contraindicated",
            ),
            Band::new(
                Bound::inclusive(15.0),
                Bound::exclusive(30.0),
                "Severely decreased",
                3,
                "Major dose reduction usually required",
            ),
            Band::new(
                Bound::inclusive(30.0),
                Bound::exclusive(60.0),
                "Moderately decreased",
                2,
                "Review renally cleared medications",
            ),
            Band::new(
                Bound::inclusive(60.0),
                Bound::exclusive(90.0),
                "Mildly decreased",
                1,
                "Dose adjustment rarely required",
            ),
            Band::new(
                Bound::inclusive(90.0),
                Bound::inclusive(6000.0),
                "Normal",
                0,
                "No dose adjustment on renal grounds",
            ),
        ],
    }
}
