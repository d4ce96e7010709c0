//! # JsonCodec — The Wire Seam
//!
//! One trait carries every type across the JSON boundary. The four methods
//! are thin, deliberate wrappers over `serde_json`: the codec is where
//! `serde_json::Error` becomes [`DecodeError`] or [`EncodeError`], so the
//! rest of the workspace never handles a raw serde error.
//!
//! Decoding is tolerant of unknown keys and missing keys (unknown ignored,
//! missing left unset) but strict about types: a recognized key holding the
//! wrong JSON type fails the whole decode rather than silently dropping a
//! field.

use serde::de::DeserializeOwned;
use serde::Serialize;
use seiswire_core::error::{DecodeError, EncodeError};

/// JSON encode/decode surface shared by every message and sub-object.
///
/// Implementations are declared per type, as `impl JsonCodec for Site {}`;
/// there is no blanket impl, so the codec surface of the crate stays
/// explicit and greppable.
pub trait JsonCodec: Serialize + DeserializeOwned {
    /// Decode from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] for malformed JSON or a wrong-typed value
    /// under a recognized key.
    fn from_json(text: &str) -> Result<Self, DecodeError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode from an already-parsed JSON value.
    ///
    /// The value is borrowed only for the duration of the call.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] for a wrong-typed value under a recognized
    /// key.
    fn from_value(value: &serde_json::Value) -> Result<Self, DecodeError> {
        Ok(Self::deserialize(value)?)
    }

    /// Encode to JSON text. Unset fields and empty sub-objects are omitted.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] when serialization fails, e.g. a time field
    /// holding an epoch with no calendar representation.
    fn to_json(&self) -> Result<String, EncodeError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Encode to a JSON value.
    ///
    /// # Errors
    ///
    /// Returns [`EncodeError`] when serialization fails.
    fn to_value(&self) -> Result<serde_json::Value, EncodeError> {
        Ok(serde_json::to_value(self)?)
    }
}
