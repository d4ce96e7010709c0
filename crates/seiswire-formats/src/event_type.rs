//! # EventType — What Kind of Event, and How Sure
//!
//! The classification of an event and the certainty with which it is held.
//! Both parts are free text on the struct and on the wire; validation
//! checks them against the [`EventKind`] and [`Certainty`] vocabularies, so
//! an out-of-vocabulary label decodes fine and simply fails `is_valid`.

use serde::{Deserialize, Serialize};
use seiswire_core::error::ValidationError;
use seiswire_core::validate::{check_label, Validate};
use seiswire_core::vocab::{Certainty, EventKind, Vocabulary};

use crate::codec::JsonCodec;

/// An event classification with its certainty.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct EventType {
    /// The classification label, drawn from [`EventKind`].
    #[serde(rename = "Type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// How firmly the classification is held, drawn from [`Certainty`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certainty: Option<String>,
}

impl EventType {
    /// Construct from raw labels, verbatim and unchecked.
    pub fn new(kind: impl Into<String>, certainty: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            certainty: Some(certainty.into()),
        }
    }

    /// Construct from vocabulary values; the result always validates.
    pub fn classified(kind: EventKind, certainty: Certainty) -> Self {
        Self::new(kind.as_str(), certainty.as_str())
    }

    /// True when neither part is set.
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.certainty.is_none()
    }
}

impl JsonCodec for EventType {}

impl Validate for EventType {
    fn validation_errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_label::<EventKind>("Type", &self.kind, &mut errors);
        check_label::<Certainty>("Certainty", &self.certainty, &mut errors);
        errors
    }
}
