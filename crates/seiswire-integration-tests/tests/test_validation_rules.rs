//! The validation contract, exercised across every message kind at once.
//!
//! Each kind has its own unit tests; these tests line the kinds up side by
//! side so a drift in the shared rules (empty sub-objects pass, empty
//! messages fail, required fields per kind, inclusive range bounds) shows
//! up against the others.

use seiswire_core::{Validate, ValidationError};
use seiswire_formats::{
    AssociationInfo, Correlation, Detection, EventType, Hypocenter, JsonCodec, Message, Pick,
    Retract, Site, Source, StationInfo, StationInfoRequest,
};

// ---------------------------------------------------------------------------
// The emptiness asymmetry
// ---------------------------------------------------------------------------

#[test]
fn empty_sub_objects_pass_every_check() {
    assert!(Site::default().is_valid());
    assert!(Source::default().is_valid());
    assert!(Hypocenter::default().is_valid());
    assert!(EventType::default().is_valid());
    assert!(AssociationInfo::default().is_valid());
}

#[test]
fn empty_messages_fail_for_every_kind() {
    for kind in ["Pick", "Correlation", "Detection", "Retract", "StationInfo", "StationInfoRequest"]
    {
        let message = Message::from_json(&format!(r#"{{"Type":"{kind}"}}"#)).unwrap();
        assert!(!message.is_valid(), "{kind} accepted an empty message");
    }
}

#[test]
fn a_single_set_field_satisfies_the_observation_kinds() {
    // Pick, correlation, and detection require nothing in particular, only
    // that the message says something.
    let mut pick = Pick::default();
    pick.phase = Some("P".to_string());
    assert!(pick.is_valid());

    let mut correlation = Correlation::default();
    correlation.correlation_value = Some(2.65);
    assert!(correlation.is_valid());

    let mut detection = Detection::default();
    detection.bayes = Some(17.3);
    assert!(detection.is_valid());
}

// ---------------------------------------------------------------------------
// Required fields per kind
// ---------------------------------------------------------------------------

#[test]
fn retract_requires_id_and_full_attribution() {
    let errors = Retract::default().validation_errors();
    assert_eq!(
        errors,
        vec![
            ValidationError::Missing { field: "ID" },
            ValidationError::Missing { field: "AgencyID" }.nested_in("Source"),
            ValidationError::Missing { field: "Author" }.nested_in("Source"),
        ]
    );
}

#[test]
fn station_info_requires_a_position() {
    let mut record = StationInfo::default();
    record.quality = Some(1.0);
    assert_eq!(
        record.validation_errors(),
        vec![
            ValidationError::Missing { field: "Latitude" },
            ValidationError::Missing { field: "Longitude" },
            ValidationError::Missing { field: "Elevation" },
        ]
    );
}

#[test]
fn station_info_request_requires_lookup_key_and_attribution() {
    let errors = StationInfoRequest::default().validation_errors();
    assert_eq!(
        errors,
        vec![
            ValidationError::Missing { field: "Station" }.nested_in("Site"),
            ValidationError::Missing { field: "Network" }.nested_in("Site"),
            ValidationError::Missing { field: "AgencyID" }.nested_in("Source"),
            ValidationError::Missing { field: "Author" }.nested_in("Source"),
        ]
    );
}

// ---------------------------------------------------------------------------
// Range bounds are inclusive
// ---------------------------------------------------------------------------

#[test]
fn boundary_values_are_legal_and_neighbors_are_not() {
    let cases: &[(f64, f64, fn(f64) -> Correlation)] = &[
        (-90.0, 90.0, at_latitude),
        (-180.0, 180.0, at_longitude),
        (-100.0, 1500.0, at_depth),
        (-2.0, 10.0, at_magnitude),
        (0.0, 10000.0, at_snr),
    ];

    for &(min, max, build) in cases {
        assert!(build(min).is_valid(), "{min} rejected at the lower bound");
        assert!(build(max).is_valid(), "{max} rejected at the upper bound");
        assert!(!build(min - 0.001).is_valid(), "below {min} accepted");
        assert!(!build(max + 0.001).is_valid(), "above {max} accepted");
    }
}

fn at_latitude(v: f64) -> Correlation {
    let mut m = Correlation::default();
    m.hypocenter.latitude = Some(v);
    m
}

fn at_longitude(v: f64) -> Correlation {
    let mut m = Correlation::default();
    m.hypocenter.longitude = Some(v);
    m
}

fn at_depth(v: f64) -> Correlation {
    let mut m = Correlation::default();
    m.hypocenter.depth = Some(v);
    m
}

fn at_magnitude(v: f64) -> Correlation {
    let mut m = Correlation::default();
    m.magnitude = Some(v);
    m
}

fn at_snr(v: f64) -> Correlation {
    let mut m = Correlation::default();
    m.snr = Some(v);
    m
}

// ---------------------------------------------------------------------------
// Vocabulary enforcement across kinds
// ---------------------------------------------------------------------------

#[test]
fn every_categorical_field_names_its_vocabulary() {
    let mut pick = Pick::default();
    pick.phase = Some("X9".to_string());
    pick.polarity = Some("sideways".to_string());
    pick.onset = Some("sudden".to_string());
    pick.picker = Some("intern".to_string());

    let vocabularies: Vec<&'static str> = pick
        .validation_errors()
        .into_iter()
        .map(|e| match e {
            ValidationError::UnknownLabel { vocabulary, .. } => vocabulary,
            other => panic!("expected an unknown label, got {other:?}"),
        })
        .collect();
    assert_eq!(vocabularies, vec!["phase", "polarity", "onset", "picker"]);

    let mut detection = Detection::default();
    detection.detection_type = Some("Revised".to_string());
    assert_eq!(detection.validation_errors().len(), 1);

    let mut correlation = Correlation::default();
    correlation.threshold_type = Some("median".to_string());
    correlation.event_type = EventType::new("Earthquake", "Confirmed");
    assert_eq!(
        correlation.validation_errors(),
        vec![ValidationError::UnknownLabel {
            field: "ThresholdType",
            vocabulary: "threshold type",
            label: "median".to_string(),
        }]
    );
}

// ---------------------------------------------------------------------------
// Verdicts survive the wire
// ---------------------------------------------------------------------------

#[test]
fn invalid_messages_decode_and_stay_invalid() {
    // Validation never blocks transport: a broken message travels intact
    // and reports the same violations on the far side.
    let mut pick = Pick::default();
    pick.phase = Some("X9".to_string());
    pick.association_info = AssociationInfo::new("P", 0.44, 400.0, -0.025, 0.086);

    let errors_before = pick.validation_errors();
    let decoded = Pick::from_json(&pick.to_json().unwrap()).unwrap();
    assert_eq!(decoded.validation_errors(), errors_before);
    assert_eq!(errors_before.len(), 2);
}
