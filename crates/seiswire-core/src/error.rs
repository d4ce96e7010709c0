//! # Error Hierarchy
//!
//! Structured error types for the seiswire crates, built with `thiserror`.
//! No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! The failure families of the wire layer are deliberately distinct:
//! [`DecodeError`] means the JSON could not be turned into a message at all,
//! [`TimeError`] means a timestamp could not be converted between its wire and
//! in-memory representations, and [`ValidationFailure`] means a structurally
//! sound message carries values outside the domain rules. Callers that retract
//! or quarantine bad traffic need to tell these apart.

use thiserror::Error;

/// Top-level error type for the seiswire crates.
#[derive(Error, Debug)]
pub enum SeiswireError {
    /// JSON could not be decoded into a message.
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// A message could not be serialized to JSON.
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// A timestamp conversion between ISO 8601 text and epoch seconds failed.
    #[error("time conversion error: {0}")]
    Time(#[from] TimeError),

    /// A decoded or constructed message violates the domain rules.
    #[error("{0}")]
    Validation(#[from] ValidationFailure),
}

/// Errors while decoding JSON into a message or sub-object.
///
/// Decoding is strict about structure and tolerant about content: unknown
/// keys are ignored and missing keys leave fields unset, but a recognized
/// key holding a value of the wrong JSON type is an error here, never a
/// silently unset field.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// Malformed JSON text, or a recognized key holding a wrong-typed value.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The top-level `Type` key names no known message kind.
    #[error("unknown message kind: {0:?}")]
    UnknownKind(String),

    /// The top-level `Type` key is absent or not a string.
    #[error("missing message kind tag")]
    MissingKind,
}

/// Errors while encoding a message to JSON.
#[derive(Error, Debug)]
pub enum EncodeError {
    /// JSON serialization failed. The usual cause is a time field holding
    /// an epoch value that cannot be rendered as a calendar date.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Errors while converting between ISO 8601 text and epoch seconds.
#[derive(Error, Debug)]
pub enum TimeError {
    /// The string is not a UTC ISO 8601 timestamp with a `Z` suffix.
    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp {
        /// The string that failed to parse.
        value: String,
        /// Why it was rejected.
        reason: String,
    },

    /// The epoch-seconds value has no calendar representation
    /// (non-finite, or outside the representable date range).
    #[error("epoch {0} is not representable as a calendar time")]
    UnrepresentableEpoch(f64),
}

/// Error returned when a vocabulary label fails to parse.
///
/// This is the `FromStr` error of the vocabulary enums in [`crate::vocab`].
/// Message validation reports the field-contextualized form,
/// [`ValidationError::UnknownLabel`], instead.
#[derive(Error, Debug)]
#[error("unknown {vocabulary} label {label:?}")]
pub struct UnknownLabelError {
    /// The name of the vocabulary that was consulted.
    pub vocabulary: &'static str,
    /// The label that matched no variant.
    pub label: String,
}

/// A single domain-rule violation found during validation.
///
/// Field names are the wire keys (`"Latitude"`, `"SNR"`, ...) so that a
/// report can be matched against the offending JSON without a mapping
/// table. Violations inside an owned sub-object are wrapped in
/// [`ValidationError::Nested`] with the sub-object's wire key.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// A numeric field lies outside its closed range.
    #[error("{field}: {value} is outside the range {min} to {max}")]
    OutOfRange {
        /// Wire key of the offending field.
        field: &'static str,
        /// The out-of-range value.
        value: f64,
        /// Lower bound, inclusive.
        min: f64,
        /// Upper bound, inclusive.
        max: f64,
    },

    /// A numeric field lies below its minimum.
    #[error("{field}: {value} is below the minimum of {min}")]
    BelowMinimum {
        /// Wire key of the offending field.
        field: &'static str,
        /// The undersized value.
        value: f64,
        /// Lower bound, inclusive.
        min: f64,
    },

    /// A set numeric field is NaN or infinite.
    #[error("{field}: {value} is not a finite number")]
    NotFinite {
        /// Wire key of the offending field.
        field: &'static str,
        /// The non-finite value.
        value: f64,
    },

    /// A categorical field holds a label outside its vocabulary.
    #[error("{field}: unknown {vocabulary} label {label:?}")]
    UnknownLabel {
        /// Wire key of the offending field.
        field: &'static str,
        /// The name of the vocabulary the field draws from.
        vocabulary: &'static str,
        /// The label that matched no variant.
        label: String,
    },

    /// A set text field is empty.
    #[error("{field}: must be non-empty when set")]
    EmptyText {
        /// Wire key of the offending field.
        field: &'static str,
    },

    /// A field this message kind requires is unset.
    #[error("{field}: required field is unset")]
    Missing {
        /// Wire key of the missing field.
        field: &'static str,
    },

    /// The message carries no data at all.
    #[error("{kind} message has no fields set")]
    EmptyMessage {
        /// The message kind label.
        kind: &'static str,
    },

    /// An owned sub-object reported a violation.
    #[error("{field}: {source}")]
    Nested {
        /// Wire key of the sub-object.
        field: &'static str,
        /// The violation found inside it.
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Wrap this violation with the wire key of the sub-object it came from.
    pub fn nested_in(self, field: &'static str) -> Self {
        Self::Nested {
            field,
            source: Box::new(self),
        }
    }
}

/// The collected outcome of a failed validation pass.
///
/// Validation never stops at the first violation; every failed check
/// contributes an entry, so one report covers the whole message.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationFailure {
    /// Every violation found, in field-declaration order.
    pub errors: Vec<ValidationError>,
}

impl std::fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "validation failed ({} error(s)): ", self.errors.len())?;
        for (i, err) in self.errors.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{err}")?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationFailure {}
