//! # Message — The Tagged Envelope
//!
//! Every message kind travels with a top-level `"Type"` key naming what it
//! is, so a consumer can dispatch without trying each decoder in turn.
//! [`Message`] is that envelope: an internally-tagged enum over the six
//! kinds. serde writes the tag on encode and dispatches on it on decode;
//! [`peek_kind`] reads the tag alone when the caller only needs to route.
//!
//! ## Design Decision
//!
//! A missing or unknown tag fails with a dedicated [`DecodeError`] variant
//! rather than a generic serde error, so routing code can distinguish "not
//! a message at all" from "a kind this build does not know". The tag check
//! runs before the body decode; serde never sees an unroutable value.

use serde::{Deserialize, Serialize};
use seiswire_core::error::{DecodeError, ValidationError};
use seiswire_core::validate::Validate;
use seiswire_core::vocab::{MessageKind, Vocabulary};

use crate::codec::JsonCodec;
use crate::correlation::Correlation;
use crate::detection::Detection;
use crate::pick::Pick;
use crate::retract::Retract;
use crate::station_info::{StationInfo, StationInfoRequest};

/// The top-level JSON key that names a message's kind.
pub const KIND_KEY: &str = "Type";

/// A message of any kind, tagged on the wire with `"Type"`.
///
/// Variant names are the wire labels; they match [`MessageKind`] exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "Type")]
pub enum Message {
    /// A single-station arrival-time pick.
    Pick(Pick),
    /// A cross-correlation detection.
    Correlation(Correlation),
    /// An event detection.
    Detection(Detection),
    /// A cancellation of a previously sent detection.
    Retract(Retract),
    /// A station metadata record.
    StationInfo(StationInfo),
    /// A request for station metadata.
    StationInfoRequest(StationInfoRequest),
}

impl Message {
    /// The kind of the wrapped message.
    pub fn kind(&self) -> MessageKind {
        match self {
            Self::Pick(_) => MessageKind::Pick,
            Self::Correlation(_) => MessageKind::Correlation,
            Self::Detection(_) => MessageKind::Detection,
            Self::Retract(_) => MessageKind::Retract,
            Self::StationInfo(_) => MessageKind::StationInfo,
            Self::StationInfoRequest(_) => MessageKind::StationInfoRequest,
        }
    }
}

impl JsonCodec for Message {
    fn from_json(text: &str) -> Result<Self, DecodeError> {
        let value: serde_json::Value = serde_json::from_str(text)?;
        Self::from_value(&value)
    }

    fn from_value(value: &serde_json::Value) -> Result<Self, DecodeError> {
        kind_of_value(value)?;
        Ok(Self::deserialize(value)?)
    }
}

impl Validate for Message {
    fn validation_errors(&self) -> Vec<ValidationError> {
        match self {
            Self::Pick(message) => message.validation_errors(),
            Self::Correlation(message) => message.validation_errors(),
            Self::Detection(message) => message.validation_errors(),
            Self::Retract(message) => message.validation_errors(),
            Self::StationInfo(message) => message.validation_errors(),
            Self::StationInfoRequest(message) => message.validation_errors(),
        }
    }
}

/// Read the kind tag of a message without decoding its body.
///
/// # Errors
///
/// Returns [`DecodeError::Json`] for malformed JSON,
/// [`DecodeError::MissingKind`] when the `"Type"` key is absent or not a
/// string, and [`DecodeError::UnknownKind`] for a tag outside
/// [`MessageKind`].
pub fn peek_kind(text: &str) -> Result<MessageKind, DecodeError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    kind_of_value(&value)
}

fn kind_of_value(value: &serde_json::Value) -> Result<MessageKind, DecodeError> {
    match value.get(KIND_KEY) {
        Some(serde_json::Value::String(label)) => MessageKind::from_label(label)
            .ok_or_else(|| DecodeError::UnknownKind(label.clone())),
        Some(_) | None => Err(DecodeError::MissingKind),
    }
}
