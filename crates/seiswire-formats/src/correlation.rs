//! # Correlation — A Cross-Correlation Detection
//!
//! A correlation message reports that a waveform matched a template: which
//! channel saw it, who computed it, the assigned phase and arrival time,
//! the correlation value itself, and optionally the template's origin
//! estimate, event classification, detection statistics, and association.
//!
//! Every field is optional on the struct; validity is asked lazily through
//! [`Validate`]. The one structural rule is the emptiness asymmetry: an
//! all-unset *sub-object* inside a correlation is fine, but an all-unset
//! correlation is not a message at all.

use serde::{Deserialize, Serialize};
use seiswire_core::error::ValidationError;
use seiswire_core::temporal::epoch_option;
use seiswire_core::validate::{
    check_finite, check_label, check_range, check_set_nonempty, nest_errors, Validate,
};
use seiswire_core::vocab::{MessageKind, Phase, ThresholdType, Vocabulary};

use crate::association::AssociationInfo;
use crate::codec::JsonCodec;
use crate::event_type::EventType;
use crate::hypocenter::Hypocenter;
use crate::site::Site;
use crate::source::Source;

/// A cross-correlation detection message.
///
/// The `correlation_value` carries no range constraint beyond finiteness:
/// normalized, unnormalized, and stacked correlation statistics all travel
/// through this field, so values well outside `[-1, 1]` are legitimate.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Correlation {
    /// Message identifier, unique to the producer.
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The channel the correlation was observed on.
    #[serde(default, skip_serializing_if = "Site::is_empty")]
    pub site: Site,
    /// Who produced the message.
    #[serde(default, skip_serializing_if = "Source::is_empty")]
    pub source: Source,
    /// The assigned phase, drawn from [`Phase`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// Arrival time as Unix epoch seconds; ISO 8601 text on the wire.
    #[serde(
        default,
        with = "epoch_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<f64>,
    /// The correlation statistic (wire key `Correlation`).
    #[serde(
        rename = "Correlation",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub correlation_value: Option<f64>,
    /// Origin estimate of the matched template.
    #[serde(default, skip_serializing_if = "Hypocenter::is_empty")]
    pub hypocenter: Hypocenter,
    /// Event classification of the matched template.
    #[serde(default, skip_serializing_if = "EventType::is_empty")]
    pub event_type: EventType,
    /// Magnitude estimate, -2 to 10.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub magnitude: Option<f64>,
    /// Signal-to-noise ratio, 0 to 10000.
    #[serde(rename = "SNR", default, skip_serializing_if = "Option::is_none")]
    pub snr: Option<f64>,
    /// Z-score of the detection statistic.
    #[serde(rename = "ZScore", default, skip_serializing_if = "Option::is_none")]
    pub z_score: Option<f64>,
    /// The detection threshold in effect.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detection_threshold: Option<f64>,
    /// How the threshold was computed, drawn from [`ThresholdType`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub threshold_type: Option<String>,
    /// Association with an event solution, if any.
    #[serde(default, skip_serializing_if = "AssociationInfo::is_empty")]
    pub association_info: AssociationInfo,
}

impl Correlation {
    /// Start building a correlation field by field.
    pub fn builder() -> CorrelationBuilder {
        CorrelationBuilder::default()
    }

    /// True when no field of the message is set.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.site.is_empty()
            && self.source.is_empty()
            && self.phase.is_none()
            && self.time.is_none()
            && self.correlation_value.is_none()
            && self.hypocenter.is_empty()
            && self.event_type.is_empty()
            && self.magnitude.is_none()
            && self.snr.is_none()
            && self.z_score.is_none()
            && self.detection_threshold.is_none()
            && self.threshold_type.is_none()
            && self.association_info.is_empty()
    }
}

impl JsonCodec for Correlation {}

impl Validate for Correlation {
    fn validation_errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.is_empty() {
            errors.push(ValidationError::EmptyMessage {
                kind: MessageKind::Correlation.as_str(),
            });
            return errors;
        }
        check_set_nonempty("ID", &self.id, &mut errors);
        nest_errors("Site", self.site.validation_errors(), &mut errors);
        nest_errors("Source", self.source.validation_errors(), &mut errors);
        check_label::<Phase>("Phase", &self.phase, &mut errors);
        check_finite("Time", self.time, &mut errors);
        check_finite("Correlation", self.correlation_value, &mut errors);
        nest_errors("Hypocenter", self.hypocenter.validation_errors(), &mut errors);
        nest_errors("EventType", self.event_type.validation_errors(), &mut errors);
        check_range("Magnitude", self.magnitude, -2.0, 10.0, &mut errors);
        check_range("SNR", self.snr, 0.0, 10000.0, &mut errors);
        check_finite("ZScore", self.z_score, &mut errors);
        check_finite("DetectionThreshold", self.detection_threshold, &mut errors);
        check_label::<ThresholdType>("ThresholdType", &self.threshold_type, &mut errors);
        nest_errors(
            "AssociationInfo",
            self.association_info.validation_errors(),
            &mut errors,
        );
        errors
    }
}

/// Chainable constructor for [`Correlation`].
///
/// Setters assign verbatim; `build` finalizes without validating, so a
/// builder can deliberately produce an invalid message for quarantine and
/// round-trip testing.
#[derive(Debug, Default)]
pub struct CorrelationBuilder {
    message: Correlation,
}

impl CorrelationBuilder {
    /// Set the message identifier.
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.message.id = Some(id.into());
        self
    }

    /// Set the observing channel.
    pub fn site(mut self, site: Site) -> Self {
        self.message.site = site;
        self
    }

    /// Set the attribution.
    pub fn source(mut self, source: Source) -> Self {
        self.message.source = source;
        self
    }

    /// Set the assigned phase label.
    pub fn phase(mut self, phase: impl Into<String>) -> Self {
        self.message.phase = Some(phase.into());
        self
    }

    /// Set the arrival time in Unix epoch seconds.
    pub fn time(mut self, epoch_seconds: f64) -> Self {
        self.message.time = Some(epoch_seconds);
        self
    }

    /// Set the correlation statistic.
    pub fn correlation_value(mut self, value: f64) -> Self {
        self.message.correlation_value = Some(value);
        self
    }

    /// Set the template origin estimate.
    pub fn hypocenter(mut self, hypocenter: Hypocenter) -> Self {
        self.message.hypocenter = hypocenter;
        self
    }

    /// Set the event classification.
    pub fn event_type(mut self, event_type: EventType) -> Self {
        self.message.event_type = event_type;
        self
    }

    /// Set the magnitude estimate.
    pub fn magnitude(mut self, magnitude: f64) -> Self {
        self.message.magnitude = Some(magnitude);
        self
    }

    /// Set the signal-to-noise ratio.
    pub fn snr(mut self, snr: f64) -> Self {
        self.message.snr = Some(snr);
        self
    }

    /// Set the z-score of the detection statistic.
    pub fn z_score(mut self, z_score: f64) -> Self {
        self.message.z_score = Some(z_score);
        self
    }

    /// Set the detection threshold.
    pub fn detection_threshold(mut self, threshold: f64) -> Self {
        self.message.detection_threshold = Some(threshold);
        self
    }

    /// Set the threshold-type label.
    pub fn threshold_type(mut self, threshold_type: impl Into<String>) -> Self {
        self.message.threshold_type = Some(threshold_type.into());
        self
    }

    /// Set the association info.
    pub fn association_info(mut self, info: AssociationInfo) -> Self {
        self.message.association_info = info;
        self
    }

    /// Finalize the message. No validation happens here.
    pub fn build(self) -> Correlation {
        self.message
    }
}
