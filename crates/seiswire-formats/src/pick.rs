//! # Pick — A Single-Station Arrival
//!
//! A pick reports that an analyst or automatic picker observed a phase
//! arrival on one channel: the arrival time, the assigned phase, the
//! first-motion polarity, the onset character, who made the pick, and,
//! once an associator has processed it, the association with an event.

use serde::{Deserialize, Serialize};
use seiswire_core::error::ValidationError;
use seiswire_core::temporal::epoch_option;
use seiswire_core::validate::{
    check_finite, check_label, check_set_nonempty, nest_errors, Validate,
};
use seiswire_core::vocab::{MessageKind, Onset, Phase, Picker, Polarity, Vocabulary};

use crate::association::AssociationInfo;
use crate::codec::JsonCodec;
use crate::site::Site;
use crate::source::Source;

/// An arrival-time pick message.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Pick {
    /// Message identifier, unique to the producer.
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// The channel the arrival was observed on.
    #[serde(default, skip_serializing_if = "Site::is_empty")]
    pub site: Site,
    /// Who produced the message.
    #[serde(default, skip_serializing_if = "Source::is_empty")]
    pub source: Source,
    /// Arrival time as Unix epoch seconds; ISO 8601 text on the wire.
    #[serde(
        default,
        with = "epoch_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<f64>,
    /// The assigned phase, drawn from [`Phase`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// First-motion polarity, drawn from [`Polarity`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub polarity: Option<String>,
    /// Onset character, drawn from [`Onset`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub onset: Option<String>,
    /// The picking agent, drawn from [`Picker`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub picker: Option<String>,
    /// Association with an event solution, if any.
    #[serde(default, skip_serializing_if = "AssociationInfo::is_empty")]
    pub association_info: AssociationInfo,
}

impl Pick {
    /// Start building a pick field by field.
    pub fn builder() -> PickBuilder {
        PickBuilder::default()
    }

    /// True when no field of the message is set.
    pub fn is_empty(&self) -> bool {
        self.id.is_none()
            && self.site.is_empty()
            && self.source.is_empty()
            && self.time.is_none()
            && self.phase.is_none()
            && self.polarity.is_none()
            && self.onset.is_none()
            && self.picker.is_none()
            && self.association_info.is_empty()
    }
}

impl JsonCodec for Pick {}

impl Validate for Pick {
    fn validation_errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.is_empty() {
            errors.push(ValidationError::EmptyMessage {
                kind: MessageKind::Pick.as_str(),
            });
            return errors;
        }
        check_set_nonempty("ID", &self.id, &mut errors);
        nest_errors("Site", self.site.validation_errors(), &mut errors);
        nest_errors("Source", self.source.validation_errors(), &mut errors);
        check_finite("Time", self.time, &mut errors);
        check_label::<Phase>("Phase", &self.phase, &mut errors);
        check_label::<Polarity>("Polarity", &self.polarity, &mut errors);
        check_label::<Onset>("Onset", &self.onset, &mut errors);
        check_label::<Picker>("Picker", &self.picker, &mut errors);
        nest_errors(
            "AssociationInfo",
            self.association_info.validation_errors(),
            &mut errors,
        );
        errors
    }
}

/// Chainable constructor for [`Pick`]. `build` does not validate.
#[derive(Debug, Default)]
pub struct PickBuilder {
    message: Pick,
}

impl PickBuilder {
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

    /// Set the arrival time in Unix epoch seconds.
    pub fn time(mut self, epoch_seconds: f64) -> Self {
        self.message.time = Some(epoch_seconds);
        self
    }

    /// Set the assigned phase label.
    pub fn phase(mut self, phase: impl Into<String>) -> Self {
        self.message.phase = Some(phase.into());
        self
    }

    /// Set the first-motion polarity label.
    pub fn polarity(mut self, polarity: impl Into<String>) -> Self {
        self.message.polarity = Some(polarity.into());
        self
    }

    /// Set the onset-character label.
    pub fn onset(mut self, onset: impl Into<String>) -> Self {
        self.message.onset = Some(onset.into());
        self
    }

    /// Set the picking-agent label.
    pub fn picker(mut self, picker: impl Into<String>) -> Self {
        self.message.picker = Some(picker.into());
        self
    }

    /// Set the association info.
    pub fn association_info(mut self, info: AssociationInfo) -> Self {
        self.message.association_info = info;
        self
    }

    /// Finalize the message. No validation happens here.
    pub fn build(self) -> Pick {
        self.message
    }
}
