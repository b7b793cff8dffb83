use medcalc_core::{
    Band, Bound, FieldSpec, LookupTable, PointItem, Predicate, RuleDefinition, ScoringMethod,
    TableRow,
};

/// GRACE-style ACS risk score: independently banded points for age,
/// heart rate, systolic blood pressure, and creatinine, plus the four
/// categorical admission components (Killip class, cardiac arrest,
/// ST-segment deviation, elevated cardiac enzymes), summed. Each table
/// is exhaustive over its field's declared range. Maximum 372 points.
pub fn definition() -> RuleDefinition {
    RuleDefinition {
        id: "grace".to_string(),
        name: "GRACE".to_string(),
        fields: vec![
            FieldSpec::integer("age", 0.0, 120.0).with_unit("years"),
            FieldSpec::integer("heart_rate", 0.0, 300.0).with_unit("bpm"),
            FieldSpec::integer("systolic_bp", 0.0, 300.0).with_unit("mmHg"),
            FieldSpec::float("creatinine", 0.1, 15.0).with_unit("mg/dL"),
            FieldSpec::choice("killip_class", &["I", "II", "III", "IV"]),
            FieldSpec::boolean("cardiac_arrest"),
            FieldSpec::boolean("st_deviation"),
            FieldSpec::boolean("elevated_enzymes"),
        ],
        method: ScoringMethod::TableSum {
            tables: vec![
                LookupTable::new(
                    "age",
                    vec![
                        TableRow::new(0.0, 30.0, 0.0),
                        TableRow::new(30.0, 40.0, 8.0),
                        TableRow::new(40.0, 50.0, 25.0),
                        TableRow::new(50.0, 60.0, 41.0),
                        TableRow::new(60.0, 70.0, 58.0),
                        TableRow::new(70.0, 80.0, 75.0),
                        TableRow::new(80.0, 90.0, 91.0),
                        TableRow::new(90.0, 121.0, 100.0),
                    ],
                ),
                LookupTable::new(
                    "heart_rate",
                    vec![
                        TableRow::new(0.0, 50.0, 0.0),
                        TableRow::new(50.0, 70.0, 3.0),
                        TableRow::new(70.0, 90.0, 9.0),
                        TableRow::new(90.0, 110.0, 15.0),
                        TableRow::new(110.0, 150.0, 24.0),
                        TableRow::new(150.0, 200.0, 38.0),
                        TableRow::new(200.0, 301.0, 46.0),
                    ],
                ),
                LookupTable::new(
                    "systolic_bp",
                    vec![
                        TableRow::new(0.0, 80.0, 58.0),
                        TableRow::new(80.0, 100.0, 53.0),
                        TableRow::new(100.0, 120.0, 43.0),
                        TableRow::new(120.0, 140.0, 34.0),
                        TableRow::new(140.0, 160.0, 24.0),
                        TableRow::new(160.0, 200.0, 10.0),
                        TableRow::new(200.0, 301.0, 0.0),
                    ],
                ),
                LookupTable::new(
                    "creatinine",
                    vec![
                        TableRow::new(0.0, 0.4, 1.0),
                        TableRow::new(0.4, 0.8, 4.0),
                        TableRow::new(0.8, 1.2, 7.0),
                        TableRow::new(1.2, 1.6, 10.0),
                        TableRow::new(1.6, 2.0, 13.0),
                        TableRow::new(2.0, 4.0, 21.0),
                        TableRow::new(4.0, 16.0, 28.0),
                    ],
                ),
            ],
            additions: vec![
                choice("killip_class", "II", 20.0),
                choice("killip_class", "III", 39.0),
                choice("killip_class", "IV", 59.0),
                flag("cardiac_arrest", 39.0),
                flag("st_deviation", 28.0),
                flag("elevated_enzymes", 14.0),
            ],
        },
        bands: vec![
            Band::new(
                Bound::inclusive(0.0),
                Bound::inclusive(108.0),
                "Low risk",
                0,
                "In-hospital mortality below 1%",
            ),
            Band::new(
                Bound::exclusive(108.0),
                Bound::inclusive(140.0),
                "Intermediate risk",
                1,
                "In-hospital mortality 1-3%",
            ),
            Band::new(
                Bound::exclusive(140.0),
                Bound::inclusive(372.0),
                "High risk",
                2,
                "In-hospital mortality above 3%; consider early invasive strategy",
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

fn flag(field: &str, points: f64) -> PointItem {
    PointItem {
        field: field.to_string(),
        when: Predicate::IsTrue,
        points,
    }
}
