use medcalc_core::{Band, Bound, NumRange};
use medcalc_engine::bands::{classify, verify_coverage};
use medcalc_engine::error::ConfigError;

fn bands() -> Vec<Band> {
    vec![
        Band::new(Bound::inclusive(0.0), Bound::exclusive(10.0), "low", 0, ""),
        Band::new(
            Bound::inclusive(10.0),
            Bound::inclusive(20.0),
            "moderate",
            1,
            "",
        ),
        Band::new(Bound::exclusive(20.0), Bound::inclusive(30.0), "high", 2, ""),
    ]
}

#[test]
fn boundary_score_classifies_into_declared_side() {
    let bands = bands();
    assert_eq!(classify("r", 0.0, &bands).unwrap().label, "low");
    assert_eq!(classify("r", 9.999, &bands).unwrap().label, "low");
    // 10 is excluded from "low" and included in "moderate".
    assert_eq!(classify("r", 10.0, &bands).unwrap().label, "moderate");
    // 20 is included in "moderate" and excluded from "high".
    assert_eq!(classify("r", 20.0, &bands).unwrap().label, "moderate");
    assert_eq!(classify("r", 20.001, &bands).unwrap().label, "high");
    assert_eq!(classify("r", 30.0, &bands).unwrap().label, "high");
}

#[test]
fn score_outside_all_bands_is_classification_error() {
    let err = classify("r", 30.5, &bands()).unwrap_err();
    assert_eq!(err.rule_id, "r");
    assert_eq!(err.score, 30.5);
}

#[test]
fn gap_is_never_rounded_to_a_neighbor() {
    let gapped = vec![
        Band::new(Bound::inclusive(0.0), Bound::exclusive(10.0), "low", 0, ""),
        Band::new(Bound::inclusive(11.0), Bound::inclusive(20.0), "high", 1, ""),
    ];
    assert!(classify("r", 10.5, &gapped).is_err());
    // Neighbors still classify normally.
    assert_eq!(classify("r", 9.0, &gapped).unwrap().label, "low");
    assert_eq!(classify("r", 11.0, &gapped).unwrap().label, "high");
}

#[test]
fn coverage_accepts_abutting_bands() {
    verify_coverage("r", &bands(), NumRange::new(0.0, 30.0)).expect("bands cover the range");
}

#[test]
fn coverage_detects_gap_between_bands() {
    let gapped = vec![
        Band::new(Bound::inclusive(0.0), Bound::exclusive(10.0), "low", 0, ""),
        Band::new(Bound::inclusive(11.0), Bound::inclusive(20.0), "high", 1, ""),
    ];
    let err = verify_coverage("r", &gapped, NumRange::new(0.0, 20.0)).unwrap_err();
    assert!(matches!(err, ConfigError::BandGap { .. }));
}

#[test]
fn coverage_detects_point_gap_at_shared_bound() {
    // Both edges exclusive at 10: the value 10 itself is uncovered.
    let pinhole = vec![
        Band::new(Bound::inclusive(0.0), Bound::exclusive(10.0), "low", 0, ""),
        Band::new(Bound::exclusive(10.0), Bound::inclusive(20.0), "high", 1, ""),
    ];
    let err = verify_coverage("r", &pinhole, NumRange::new(0.0, 20.0)).unwrap_err();
    assert!(matches!(err, ConfigError::BandGap { .. }));
}

#[test]
fn coverage_detects_uncovered_edges() {
    let err = verify_coverage("r", &bands(), NumRange::new(0.0, 40.0)).unwrap_err();
    assert!(matches!(err, ConfigError::UncoveredEdge { value, .. } if value == 40.0));

    let err = verify_coverage("r", &bands(), NumRange::new(-5.0, 30.0)).unwrap_err();
    assert!(matches!(err, ConfigError::UncoveredEdge { value, .. } if value == -5.0));
}
