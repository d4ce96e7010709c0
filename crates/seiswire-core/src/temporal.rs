//! # Time Adapter — ISO 8601 Wire Text ⇄ Epoch Seconds
//!
//! Messages carry instants in memory as `f64` Unix epoch seconds and on the
//! wire as UTC ISO 8601 strings with a `Z` suffix and millisecond precision
//! (e.g. `2014-08-18T02:12:12.900Z`). This module is the only place the two
//! representations meet; everything else in the workspace treats time as a
//! plain number.
//!
//! ## Design Decision
//!
//! Detection messages come from pickers and associators that exchange
//! arrival times in epoch seconds but publish JSON readable by humans and
//! by downstream systems in other languages. Millisecond wire precision is
//! the interchange contract: [`format_iso8601`] always renders exactly
//! three fractional digits, and [`parse_iso8601`] truncates anything finer,
//! so `parse(format(parse(s))) == parse(s)` holds for every accepted input.
//!
//! Only the `Z` suffix is accepted. An explicit offset such as `+00:00` is
//! rejected even though it denotes the same instant, so that every system
//! emits byte-identical timestamps for the same time.

use chrono::{DateTime, Utc};

use crate::error::TimeError;

/// The wire rendering of an instant: UTC, millisecond precision, `Z` suffix.
const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Parse a UTC ISO 8601 timestamp into Unix epoch seconds.
///
/// Accepts any sub-second precision and truncates to milliseconds. Rejects
/// strings without a `Z` suffix, including semantically equivalent offsets
/// like `+00:00`.
///
/// # Errors
///
/// Returns [`TimeError::InvalidTimestamp`] if the string is not RFC 3339 /
/// ISO 8601, or does not end in `Z`.
pub fn parse_iso8601(text: &str) -> Result<f64, TimeError> {
    if !text.ends_with('Z') {
        return Err(TimeError::InvalidTimestamp {
            value: text.to_string(),
            reason: "timestamp must use the Z suffix (UTC only)".to_string(),
        });
    }

    let parsed = DateTime::parse_from_rfc3339(text).map_err(|e| TimeError::InvalidTimestamp {
        value: text.to_string(),
        reason: e.to_string(),
    })?;

    Ok(parsed.with_timezone(&Utc).timestamp_millis() as f64 / 1000.0)
}

/// Render Unix epoch seconds as a UTC ISO 8601 timestamp.
///
/// The epoch is rounded to the nearest millisecond and rendered with exactly
/// three fractional digits and a `Z` suffix.
///
/// # Errors
///
/// Returns [`TimeError::UnrepresentableEpoch`] if the value is NaN, infinite,
/// or outside the representable calendar range.
pub fn format_iso8601(epoch_seconds: f64) -> Result<String, TimeError> {
    let millis = (epoch_seconds * 1000.0).round();
    if !millis.is_finite() || millis < i64::MIN as f64 || millis > i64::MAX as f64 {
        return Err(TimeError::UnrepresentableEpoch(epoch_seconds));
    }

    let instant = DateTime::<Utc>::from_timestamp_millis(millis as i64)
        .ok_or(TimeError::UnrepresentableEpoch(epoch_seconds))?;

    Ok(instant.format(WIRE_FORMAT).to_string())
}

/// Serde adapter for `Option<f64>` epoch-second fields that travel as
/// ISO 8601 text.
///
/// Apply with `#[serde(default, with = "epoch_option", skip_serializing_if =
/// "Option::is_none")]`. A missing key stays `None`; a JSON number under the
/// key is a type error, never a silent reinterpretation.
pub mod epoch_option {
    use serde::{Deserialize, Deserializer, Serializer};

    use super::{format_iso8601, parse_iso8601};

    /// Serialize an optional epoch as ISO 8601 text.
    pub fn serialize<S>(epoch: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match epoch {
            Some(seconds) => {
                let text = format_iso8601(*seconds).map_err(serde::ser::Error::custom)?;
                serializer.serialize_str(&text)
            }
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional epoch from ISO 8601 text.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(text) => parse_iso8601(&text)
                .map(Some)
                .map_err(serde::de::Error::custom),
            None => Ok(None),
        }
    }
}
