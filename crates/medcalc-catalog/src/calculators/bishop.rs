use medcalc_core::{
    Band, Bound, FieldSpec, PointItem, Predicate, RuleDefinition, ScoringMethod,
};

/// Bishop score: pre-induction cervical assessment. Five categorical
/// items, total 0–13. A total of 8 or more is favorable (Bishop 1964;
/// the cutoff is inclusive).
pub fn definition() -> RuleDefinition {
    RuleDefinition {
        id: "bishop".to_string(),
        name: "Bishop Score".to_string(),
        fields: vec![
            FieldSpec::choice("dilation", &["closed", "1-2 cm", "3-4 cm", "5+ cm"]),
            FieldSpec::choice("effacement", &["0-30%", "40-50%", "60-70%", "80%+"]),
            FieldSpec::choice("station", &["-3", "-2", "-1/0", "+1/+2"]),
            FieldSpec::choice("consistency", &["firm", "medium", "soft"]),
            FieldSpec::choice("position", &["posterior", "mid", "anterior"]),
        ],
        method: ScoringMethod::PointSum {
            items: vec![
                choice("dilation", "1-2 cm", 1.0),
                choice("dilation", "3-4 cm", 2.0),
                choice("dilation", "5+ cm", 3.0),
                choice("effacement", "40-50%", 1.0),
                choice("effacement", "60-70%", 2.0),
                choice("effacement", "80%+", 3.0),
                choice("station", "-2", 1.0),
                choice("station", "-1/0", 2.0),
                choice("station", "+1/+2", 3.0),
                choice("consistency", "medium", 1.0),
                choice("consistency", "soft", 2.0),
                choice("position", "mid", 1.0),
                choice("position", "anterior", 2.0),
            ],
        },
        bands: vec![
            Band::new(
                Bound::inclusive(0.0),
                Bound::exclusive(6.0),
                "Unfavorable",
                2,
                "Induction unlikely to succeed; consider cervical ripening",
            ),
            Band::new(
                Bound::inclusive(6.0),
                Bound::exclusive(8.0),
                "Intermediate",
                1,
                "Induction success uncertain",
            ),
            Band::new(
                Bound::inclusive(8.0),
                Bound::inclusive(13.0),
                "Favorable",
                0,
                "Spontaneous labour likely; induction likely to succeed",
            ),
        ],
    }
}

fn choice(field: &str, value: &str, points: f64) -> PointItem {
    PointItem {
        field: field.to_string(),
        when: Predicate::Eq(value.to_string()),
        points,
    }
}
