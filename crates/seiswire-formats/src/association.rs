//! # AssociationInfo — How an Arrival Ties to an Event
//!
//! When an associator links a pick or correlation to an event, it records
//! the assigned phase and the geometric fit: distance and azimuth from the
//! event to the station, the travel-time residual, and the association
//! sigma. An all-unset association is the normal state of an unassociated
//! message and is valid.

use serde::{Deserialize, Serialize};
use seiswire_core::error::ValidationError;
use seiswire_core::validate::{check_finite, check_label, check_min, check_range, Validate};
use seiswire_core::vocab::Phase;

use crate::codec::JsonCodec;

/// Association of an arrival with an event solution.
///
/// Units: degrees for `distance` (epicentral) and `azimuth`, seconds for
/// `residual`; `sigma` is dimensionless.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AssociationInfo {
    /// The phase the associator assigned, drawn from [`Phase`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phase: Option<String>,
    /// Epicentral distance in degrees, non-negative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    /// Event-to-station azimuth in degrees, 0 to 360.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub azimuth: Option<f64>,
    /// Travel-time residual in seconds.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub residual: Option<f64>,
    /// Association sigma.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sigma: Option<f64>,
}

impl AssociationInfo {
    /// Construct with every field set, verbatim and unchecked.
    pub fn new(
        phase: impl Into<String>,
        distance: f64,
        azimuth: f64,
        residual: f64,
        sigma: f64,
    ) -> Self {
        Self {
            phase: Some(phase.into()),
            distance: Some(distance),
            azimuth: Some(azimuth),
            residual: Some(residual),
            sigma: Some(sigma),
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.phase.is_none()
            && self.distance.is_none()
            && self.azimuth.is_none()
            && self.residual.is_none()
            && self.sigma.is_none()
    }
}

impl JsonCodec for AssociationInfo {}

impl Validate for AssociationInfo {
    fn validation_errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_label::<Phase>("Phase", &self.phase, &mut errors);
        check_min("Distance", self.distance, 0.0, &mut errors);
        check_range("Azimuth", self.azimuth, 0.0, 360.0, &mut errors);
        check_finite("Residual", self.residual, &mut errors);
        check_finite("Sigma", self.sigma, &mut errors);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_association_is_empty_and_valid() {
        let info = AssociationInfo::default();
        assert!(info.is_empty());
        assert!(info.is_valid());
    }

    #[test]
    fn new_sets_every_field() {
        let info = AssociationInfo::new("P", 0.442559, 0.418479, -0.025393, 0.086333);
        assert_eq!(info.phase.as_deref(), Some("P"));
        assert_eq!(info.distance, Some(0.442559));
        assert_eq!(info.azimuth, Some(0.418479));
        assert_eq!(info.residual, Some(-0.025393));
        assert_eq!(info.sigma, Some(0.086333));
        assert!(info.is_valid());
    }

    #[test]
    fn round_trips_through_wire_form() {
        let info = AssociationInfo::new("P", 0.442559, 0.418479, -0.025393, 0.086333);
        let decoded = AssociationInfo::from_json(&info.to_json().unwrap()).unwrap();
        assert_eq!(decoded, info);
    }

    #[test]
    fn unassociated_phase_label_fails_validation() {
        let mut info = AssociationInfo::default();
        info.phase = Some("X99".to_string());
        assert!(matches!(
            info.validation_errors()[0],
            ValidationError::UnknownLabel { field: "Phase", .. }
        ));
    }

    #[test]
    fn negative_distance_is_invalid() {
        let mut info = AssociationInfo::default();
        info.distance = Some(-1.0);
        assert!(!info.is_valid());
    }

    #[test]
    fn azimuth_is_range_checked() {
        let mut info = AssociationInfo::default();
        info.azimuth = Some(360.0);
        assert!(info.is_valid());
        info.azimuth = Some(360.5);
        assert!(!info.is_valid());
    }

    #[test]
    fn negative_residual_is_legal() {
        let mut info = AssociationInfo::default();
        info.residual = Some(-0.025393);
        assert!(info.is_valid());
    }
}
