//! # Detection — An Associated Event
//!
//! A detection reports an event solution produced by an associator: the
//! origin estimate, the lifecycle stage of the report (new, update, final,
//! retract), when the detection was made, and the solution statistics. The
//! per-station data that contributed to the solution travels separately as
//! pick and correlation messages.

use serde::{Deserialize, Serialize};
use seiswire_core::error::ValidationError;
use seiswire_core::temporal::epoch_option;
use seiswire_core::validate::{
    check_finite, check_label, check_min, check_range, check_set_nonempty, nest_errors, Validate,
};
use seiswire_core::vocab::{DetectionType, MessageKind, Vocabulary};

use crate::codec::JsonCodec;
use crate::event_type::EventType;
use crate::hypocenter::Hypocenter;
use crate::source::Source;

/// An event detection message.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Detection {
    /// Message identifier, unique to the producer.
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Who produced the message.
    #[serde(default, skip_serializing_if = "Source::is_empty")]
    pub source: Source,
    /// The event origin estimate.
    #[serde(default, skip_serializing_if = "Hypocenter::is_empty")]
    pub hypocenter: Hypocenter,
    /// Lifecycle stage of the report, drawn from [`DetectionType`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection_type: Option<String>,
    /// When the detection was made, as Unix epoch seconds; ISO 8601 text
    /// on the wire.
    #[serde(
        default,
        with = "epoch_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub detection_time: Option<f64>,
    /// Event classification.
    #[serde(default, skip_serializing_if = "EventType::is_empty")]
    pub event_type: EventType,
    /// Bayesian solution statistic, non-negative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bayes: Option<f64>,
    /// Distance to the closest contributing station in degrees,
    /// non-negative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_distance: Option<f64>,
    /// Travel-time residual RMS of the solution in seconds.
    #[serde(rename = "RMS", default, skip_serializing_if = "Option::is_none")]
    pub rms: Option<f64>,
    /// Largest azimuthal gap between contributing stations in degrees,
    /// 0 to 360.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gap: Option<f64>,
}

impl Detection {
    /// Start building a detection field by field.
    pub fn builder() -> DetectionBuilder {
        DetectionBuilder::default()
    }

    /// True when no field of the message is set.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.source.is_empty()
            && self.hypocenter.is_empty()
            && self.detection_type.is_none()
            && self.detection_time.is_none()
            && self.event_type.is_empty()
            && self.bayes.is_none()
            && self.minimum_distance.is_none()
            && self.rms.is_none()
            && self.gap.is_none()
    }
}

impl JsonCodec for Detection {}

impl Validate for Detection {
    fn validation_errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.is_empty() {
            errors.push(ValidationError::EmptyMessage {
                kind: MessageKind::Detection.as_str(),
            });
            return errors;
        }
        check_set_nonempty("ID", &self.id, &mut errors);
        nest_errors("Source", self.source.validation_errors(), &mut errors);
        nest_errors("Hypocenter", self.hypocenter.validation_errors(), &mut errors);
        check_label::<DetectionType>("DetectionType", &self.detection_type, &mut errors);
        check_finite("DetectionTime", self.detection_time, &mut errors);
        nest_errors("EventType", self.event_type.validation_errors(), &mut errors);
        check_min("Bayes", self.bayes, 0.0, &mut errors);
        check_min("MinimumDistance", self.minimum_distance, 0.0, &mut errors);
        check_finite("RMS", self.rms, &mut errors);
        check_range("Gap", self.gap, 0.0, 360.0, &mut errors);
        errors
    }
}

/// Chainable constructor for [`Detection`]. `build` does not validate.
#[derive(Debug, Default)]
pub struct DetectionBuilder {
    message: Detection,
}

impl DetectionBuilder {
    /// Set the message identifier.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.message.id = Some(id.into());
        self
    }

    /// Set the attribution.
    pub fn source(mut self, source: Source) -> Self {
        self.message.source = source;
        self
    }

    /// Set the origin estimate.
    pub fn hypocenter(mut self, hypocenter: Hypocenter) -> Self {
        self.message.hypocenter = hypocenter;
        self
    }

    /// Set the lifecycle-stage label.
    pub fn detection_type(mut self, detection_type: impl Into<String>) -> Self {
        self.message.detection_type = Some(detection_type.into());
        self
    }

    /// Set the detection time in Unix epoch seconds.
    pub fn detection_time(mut self, epoch_seconds: f64) -> Self {
        self.message.detection_time = Some(epoch_seconds);
        self
    }

    /// Set the event classification.
    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.message.event_type = event_type;
        self
    }

    /// Set the Bayesian solution statistic.
    pub fn bayes(mut self, bayes: f64) -> Self {
        self.message.bayes = Some(bayes);
        self
    }

    /// Set the minimum station distance.
    pub fn minimum_distance(mut self, distance: f64) -> Self {
        self.message.minimum_distance = Some(distance);
        self
    }

    /// Set the solution RMS.
    pub fn rms(mut self, rms: f64) -> Self {
        self.message.rms = Some(rms);
        self
    }

    /// Set the azimuthal gap.
    pub fn gap(mut self, gap: f64) -> Self {
        self.message.gap = Some(gap);
        self
    }

    /// Finalize the message. No validation happens here.
    pub fn build(self) -> Detection {
        self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seiswire_core::vocab::{Certainty, EventKind};

    fn reference() -> Detection {
        Detection::builder()
            .id("12GFH48776857")
            .source(Source::new("US", "glass"))
            .hypocenter(
                Hypocenter::new(40.3344, -121.44, 1408327932.59, 32.44)
                    .with_errors(12.5, 22.64, 2.5, 2.44),
            )
            .detection_type("New")
            .detection_time(1408327982.1)
            .event_type(EventType::classified(
                EventKind::Earthquake,
                Certainty::Suspected,
            ))
            .bayes(2.65)
            .minimum_distance(2.14)
            .rms(3.8)
            .gap(33.67)
            .build()
    }

    #[test]
    fn default_detection_is_empty_and_reports_so() {
        let message = Detection::default();
        assert!(message.is_empty());
        assert_eq!(
            message.validation_errors(),
            vec![ValidationError::EmptyMessage { kind: "Detection" }]
        );
    }

    #[test]
    fn reference_detection_is_valid() {
        assert!(reference().is_valid());
    }

    #[test]
    fn wire_round_trip_preserves_every_field() {
        let message = reference();
        let decoded = Detection::from_json(&message.to_json().unwrap()).unwrap();
        assert_eq!(decoded, message);
    }

    #[test]
    fn rms_and_detection_time_wire_keys() {
        let value = reference().to_value().unwrap();
        let object = value.as_object().unwrap();
        assert!(object.contains_key("RMS"));
        assert_eq!(value["DetectionTime"], "2014-08-18T02:13:02.100Z");
        assert!(!object.contains_key("Rms"));
    }

    #[test]
    fn lifecycle_label_is_vocabulary_checked() {
        let mut message = reference();
        message.detection_type = Some("Revised".to_string());
        assert!(matches!(
            &message.validation_errors()[0],
            ValidationError::UnknownLabel {
                field: "DetectionType",
                ..
            }
        ));
    }

    #[test]
    fn solution_statistics_are_bounded() {
        let mut message = reference();
        message.bayes = Some(-0.1);
        message.gap = Some(361.0);
        assert_eq!(message.validation_errors().len(), 2);
    }

    #[test]
    fn negative_rms_is_legal() {
        // RMS is carried as reported; only finiteness is enforced.
        let mut message = reference();
        message.rms = Some(-1.0);
        assert!(message.is_valid());
    }
}
