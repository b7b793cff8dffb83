use medcalc_core::{
    Band, Bound, FieldSpec, PointItem, Predicate, RuleDefinition, ScoringMethod,
};

/// Wells criteria for pulmonary embolism. Point scale 0–12.5 with
/// half-point weights; three-tier interpretation.
pub fn definition() -> RuleDefinition {
    RuleDefinition {
        id: "wells_pe".to_string(),
        name: "Wells (PE)".to_string(),
        fields: vec![
            FieldSpec::boolean("clinical_dvt_signs"),
            FieldSpec::boolean("pe_most_likely"),
            FieldSpec::integer("heart_rate", 0.0, 300.0).with_unit("bpm"),
            FieldSpec::boolean("immobilization_or_surgery"),
            FieldSpec::boolean("previous_dvt_pe"),
            FieldSpec::boolean("hemoptysis"),
            FieldSpec::boolean("malignancy"),
        ],
        method: ScoringMethod::PointSum {
            items: vec![
                item("clinical_dvt_signs", Predicate::IsTrue, 3.0),
                item("pe_most_likely", Predicate::IsTrue, 3.0),
                // Published criterion is heart rate > 100.
                item("heart_rate", Predicate::AtLeast(101.0), 1.5),
                item("immobilization_or_surgery", Predicate::IsTrue, 1.5),
                item("previous_dvt_pe", Predicate::IsTrue, 1.5),
                item("hemoptysis", Predicate::IsTrue, 1.0),
                item("malignancy", Predicate::IsTrue, 1.0),
            ],
        },
        bands: vec![
            Band::new(
                Bound::inclusive(0.0),
                Bound::exclusive(2.0),
                "Low probability",
                0,
                "PE unlikely; consider d-dimer to rule out",
            ),
            Band::new(
                Bound::inclusive(2.0),
                Bound::inclusive(6.0),
                "Moderate probability",
                1,
                "Consider d-dimer or imaging",
            ),
            Band::new(
                Bound::exclusive(6.0),
                Bound::inclusive(12.5),
                "High probability",
                2,
                "CT pulmonary angiography indicated",
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
