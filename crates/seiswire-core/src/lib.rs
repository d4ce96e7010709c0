#![deny(missing_docs)]

//! # seiswire-core — Foundational Types for the Seiswire Formats
//!
//! This crate defines the pieces every message type in the workspace is
//! built from. It has no internal crate dependencies, only `serde`,
//! `serde_json`, `thiserror`, and `chrono` from the external ecosystem.
//!
//! ## Design Principles
//!
//! 1. **Unset is `None`, never a sentinel.** No NaN latitudes, no
//!    empty-string identifiers standing in for "absent". A field that was
//!    not provided is an `Option` holding nothing, and it is omitted from
//!    the wire form entirely.
//!
//! 2. **Validation is lazy and total.** Nothing is checked at construction
//!    or assignment; the [`Validate`] trait answers the validity question
//!    on demand and reports every violation at once, not just the first.
//!
//! 3. **Failure families stay distinct.** Undecodable JSON
//!    ([`DecodeError`]), unconvertible timestamps ([`TimeError`]), and
//!    semantically invalid messages ([`ValidationFailure`]) are different
//!    situations with different handling; the [`SeiswireError`] union
//!    exists for callers that want one `?` target, not to blur them.
//!
//! 4. **One definition per vocabulary.** Every categorical field's label
//!    set lives in [`vocab`] as an enum with exhaustive `match`, so the
//!    values a validator accepts and the values documentation lists cannot
//!    drift apart.

pub mod error;
pub mod temporal;
pub mod validate;
pub mod vocab;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{
    DecodeError, EncodeError, SeiswireError, TimeError, UnknownLabelError, ValidationError,
    ValidationFailure,
};
pub use temporal::{format_iso8601, parse_iso8601};
pub use validate::Validate;
pub use vocab::{
    Certainty, DetectionType, EventKind, MessageKind, Onset, Phase, Picker, Polarity,
    ThresholdType, Vocabulary,
};
