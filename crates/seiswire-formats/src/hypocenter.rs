//! # Hypocenter — Where and When an Event Occurred
//!
//! The estimated origin of an event: geographic coordinates, origin time,
//! depth, and the uncertainty of each. The principal four fields and the
//! four error fields are all independently optional; a location estimate
//! without uncertainties is still a location estimate.

use serde::{Deserialize, Serialize};
use seiswire_core::error::ValidationError;
use seiswire_core::temporal::epoch_option;
use seiswire_core::validate::{check_finite, check_min, check_range, Validate};

use crate::codec::JsonCodec;

/// An event origin estimate with per-field uncertainties.
///
/// Units: degrees for latitude/longitude, kilometers for depth and the
/// spatial errors, Unix epoch seconds for `time`, and seconds for
/// `time_error`. Depth is positive downward; shallow airquakes reported by
/// routine processing make slightly negative depths legal down to -100 km.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Hypocenter {
    /// Geographic latitude in decimal degrees, -90 to 90.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Geographic longitude in decimal degrees, -180 to 180.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Origin time as Unix epoch seconds; ISO 8601 text on the wire.
    #[serde(
        default,
        with = "epoch_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub time: Option<f64>,
    /// Depth below the surface in kilometers, -100 to 1500.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    /// Latitude uncertainty in kilometers, non-negative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude_error: Option<f64>,
    /// Longitude uncertainty in kilometers, non-negative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude_error: Option<f64>,
    /// Origin-time uncertainty in seconds, non-negative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_error: Option<f64>,
    /// Depth uncertainty in kilometers, non-negative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth_error: Option<f64>,
}

impl Hypocenter {
    /// Construct a hypocenter from the four principal fields, verbatim and
    /// unchecked. Uncertainties start unset; add them with
    /// [`Hypocenter::with_errors`].
    pub fn new(latitude: f64, longitude: f64, time: f64, depth: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
            time: Some(time),
            depth: Some(depth),
            ..Self::default()
        }
    }

    /// Set all four uncertainty fields.
    pub fn with_errors(
        mut self,
        latitude_error: f64,
        longitude_error: f64,
        time_error: f64,
        depth_error: f64,
    ) -> Self {
        self.latitude_error = Some(latitude_error);
        self.longitude_error = Some(longitude_error);
        self.time_error = Some(time_error);
        self.depth_error = Some(depth_error);
        self
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.latitude.is_none()
            && self.longitude.is_none()
            && self.time.is_none()
            && self.depth.is_none()
            && self.latitude_error.is_none()
            && self.longitude_error.is_none()
            && self.time_error.is_none()
            && self.depth_error.is_none()
    }
}

impl JsonCodec for Hypocenter {}

impl Validate for Hypocenter {
    fn validation_errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_range("Latitude", self.latitude, -90.0, 90.0, &mut errors);
        check_range("Longitude", self.longitude, -180.0, 180.0, &mut errors);
        check_finite("Time", self.time, &mut errors);
        check_range("Depth", self.depth, -100.0, 1500.0, &mut errors);
        check_min("LatitudeError", self.latitude_error, 0.0, &mut errors);
        check_min("LongitudeError", self.longitude_error, 0.0, &mut errors);
        check_min("TimeError", self.time_error, 0.0, &mut errors);
        check_min("DepthError", self.depth_error, 0.0, &mut errors);
        errors
    }
}
