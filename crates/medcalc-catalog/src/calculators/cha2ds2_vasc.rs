use medcalc_core::{
    Band, Bound, FieldSpec, PointItem, Predicate, RuleDefinition, ScoringMethod,
};

/// CHA₂DS₂-VASc: stroke risk in non-valvular atrial fibrillation.
/// Point scale 0–9; anticoagulation is generally considered from 2.
pub fn definition() -> RuleDefinition {
    RuleDefinition {
        id: "cha2ds2_vasc".to_string(),
        name: "CHA₂DS₂-VASc".to_string(),
        fields: vec![
            FieldSpec::integer("age", 0.0, 120.0).with_unit("years"),
            FieldSpec::choice("sex", &["male", "female"]),
            FieldSpec::boolean("chf"),
            FieldSpec::boolean("hypertension"),
            FieldSpec::boolean("diabetes"),
            FieldSpec::boolean("stroke_or_tia"),
            FieldSpec::boolean("vascular_disease"),
        ],
        method: ScoringMethod::PointSum {
            items: vec![
                item("age", Predicate::AtLeast(75.0), 2.0),
                item("age", Predicate::Between { lo: 65.0, hi: 74.0 }, 1.0),
                item("sex", Predicate::Eq("female".to_string()), 1.0),
                item("chf", Predicate::IsTrue, 1.0),
                item("hypertension", Predicate::IsTrue, 1.0),
                item("diabetes", Predicate::IsTrue, 1.0),
                item("stroke_or_tia", Predicate::IsTrue, 2.0),
                item("vascular_disease", Predicate::IsTrue, 1.0),
            ],
        },
        bands: vec![
            Band::new(
                Bound::inclusive(0.0),
                Bound::exclusive(1.0),
                "Low risk",
                0,
                "Anticoagulation not recommended",
            ),
            Band::new(
                Bound::inclusive(1.0),
                Bound::exclusive(2.0),
                "Intermediate risk",
                1,
                "Consider anticoagulation",
            ),
            Band::new(
                Bound::inclusive(2.0),
                Bound::inclusive(9.0),
                "High risk",
                2,
                "Anticoagulation recommended",
            ),
        ],
    }
}

fn item(field: &str, when: Predicate, points: f64) -> PointItem {
    PointItem {
        field: field.to_string(),
        when,
        points,
    }
}
