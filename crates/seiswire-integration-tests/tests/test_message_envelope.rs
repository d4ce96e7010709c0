//! Kind-tagged routing of a mixed message stream.
//!
//! A consumer reading a shared feed sees every message kind interleaved.
//! These tests drive the dispatch path such a consumer uses: peek at the
//! tag, decode the whole message, and hand it to the right handler;
//! quarantine anything that cannot be routed.

use std::collections::HashMap;

use seiswire_core::{DecodeError, MessageKind, Validate};
use seiswire_formats::{
    peek_kind, Correlation, Detection, JsonCodec, Message, Pick, Retract, Site, Source,
    StationInfo, StationInfoRequest,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn site() -> Site {
    Site::new("BMN", "HHZ", "OK", "01")
}

fn source() -> Source {
    Source::new("US", "TestAuthor")
}

fn correlation() -> Correlation {
    Correlation::builder()
        .id("12GFH48776857")
        .site(site())
        .source(source())
        .phase("P")
        .time(1408327932.9)
        .correlation_value(2.65)
        .build()
}

fn one_of_each() -> Vec<Message> {
    vec![
        Message::Pick(
            Pick::builder()
                .id("22637620")
                .site(site())
                .source(source())
                .time(1408327932.59)
                .phase("P")
                .build(),
        ),
        Message::Correlation(correlation()),
        Message::Detection(
            Detection::builder()
                .id("12GFH48776857")
                .source(source())
                .detection_type("New")
                .detection_time(1408327982.1)
                .build(),
        ),
        Message::Retract(Retract::new("12GFH48776857", source())),
        Message::StationInfo(
            StationInfo::builder()
                .site(site())
                .latitude(45.59697)
                .longitude(-111.62967)
                .elevation(1589.0)
                .build(),
        ),
        Message::StationInfoRequest(StationInfoRequest::new(site(), source())),
    ]
}

// ---------------------------------------------------------------------------
// Routing
// ---------------------------------------------------------------------------

#[test]
fn mixed_stream_routes_every_kind_to_its_handler() {
    let wire: Vec<String> = one_of_each()
        .iter()
        .map(|m| m.to_json().unwrap())
        .collect();

    let mut seen: HashMap<MessageKind, usize> = HashMap::new();
    for text in &wire {
        // Route on the tag alone, then decode the full message and check
        // the two agree.
        let kind = peek_kind(text).unwrap();
        let message = Message::from_json(text).unwrap();
        assert_eq!(message.kind(), kind);
        assert!(message.is_valid(), "{:?}", message.validation_errors());
        *seen.entry(kind).or_insert(0) += 1;
    }

    assert_eq!(seen.len(), 6);
    assert!(seen.values().all(|&count| count == 1));
}

#[test]
fn retract_cancels_an_earlier_detection_by_id() {
    let detection = Detection::builder()
        .id("12GFH48776857")
        .source(source())
        .detection_type("New")
        .detection_time(1408327982.1)
        .build();
    let stream = vec![
        Message::Detection(detection).to_json().unwrap(),
        Message::Retract(Retract::new("12GFH48776857", source()))
            .to_json()
            .unwrap(),
    ];

    let mut active: HashMap<String, Detection> = HashMap::new();
    for text in &stream {
        match Message::from_json(text).unwrap() {
            Message::Detection(detection) => {
                let id = detection.id.clone().unwrap();
                active.insert(id, detection);
            }
            Message::Retract(retract) => {
                active.remove(retract.id.as_deref().unwrap());
            }
            other => panic!("unexpected kind in stream: {:?}", other.kind()),
        }
    }

    assert!(active.is_empty());
}

#[test]
fn direct_decode_ignores_the_envelope_tag() {
    // A consumer interested in one kind only may decode tagged traffic
    // with that kind's own decoder; the tag is just an unknown key to it.
    let original = correlation();
    let tagged = Message::Correlation(original.clone()).to_json().unwrap();

    assert!(tagged.contains(r#""Type":"Correlation""#));
    assert_eq!(Correlation::from_json(&tagged).unwrap(), original);
}

#[test]
fn the_envelope_adds_only_the_kind_tag() {
    // Strip the tag from enveloped wire text and what remains is the
    // plain encoding of the same message, key for key.
    let original = correlation();
    let direct = original.to_value().unwrap();

    let wire = Message::Correlation(original).to_json().unwrap();
    let mut tagged: serde_json::Value = serde_json::from_str(&wire).unwrap();
    let tag = tagged.as_object_mut().unwrap().remove("Type");

    assert_eq!(tag, Some(serde_json::Value::String("Correlation".into())));
    assert_eq!(tagged, direct);
}

// ---------------------------------------------------------------------------
// Quarantine paths
// ---------------------------------------------------------------------------

#[test]
fn unknown_kinds_are_quarantined_before_decoding() {
    let foreign = r#"{"Type":"Origin","ID":"E1","Latitude":35.0}"#;
    match peek_kind(foreign) {
        Err(DecodeError::UnknownKind(label)) => assert_eq!(label, "Origin"),
        other => panic!("expected an unknown kind, got {other:?}"),
    }
    assert!(Message::from_json(foreign).is_err());
}

#[test]
fn tagless_traffic_cannot_be_routed() {
    // Valid correlation content, but nothing says so at the top level.
    let tagless = r#"{"ID":"12GFH48776857","Phase":"P","Correlation":2.65}"#;
    assert!(matches!(peek_kind(tagless), Err(DecodeError::MissingKind)));
    assert!(matches!(
        Message::from_json(tagless),
        Err(DecodeError::MissingKind)
    ));
}
