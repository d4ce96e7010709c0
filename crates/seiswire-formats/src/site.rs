//! # Site — Where a Signal Was Observed
//!
//! Identifies the recording channel by the conventional SCNL quadruple:
//! station, channel, network, location. All four codes are independently
//! optional; which ones a message needs is decided by the message kind,
//! not here.

use serde::{Deserialize, Serialize};
use seiswire_core::error::ValidationError;
use seiswire_core::validate::{check_set_nonempty, Validate};

use crate::codec::JsonCodec;

/// The station/channel/network/location identification of a sensor.
///
/// A set code must be non-empty, with one exception: `location` may be the
/// empty string, because blank location codes are a live convention in
/// station naming.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Site {
    /// Station code (e.g. `"BMN"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub station: Option<String>,
    /// Channel code (e.g. `"HHZ"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// Network code (e.g. `"LB"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network: Option<String>,
    /// Location code within the station (e.g. `"01"`, possibly blank).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Site {
    /// Construct a site with every code set.
    ///
    /// Values are assigned verbatim; nothing is checked here. Use
    /// `Site::default()` plus field assignment for partially specified
    /// sites.
    pub fn new(
        station: impl Into<String>,
        channel: impl Into<String>,
        network: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            station: Some(station.into()),
            channel: Some(channel.into()),
            network: Some(network.into()),
            location: Some(location.into()),
        }
    }

    /// True when no code is set.
    pub fn is_empty(&self) -> bool {
        self.station.is_none()
            && self.channel.is_none()
            && self.network.is_none()
            && self.location.is_none()
    }
}

impl JsonCodec for Site {}

impl Validate for Site {
    fn validation_errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_set_nonempty("Station", &self.station, &mut errors);
        check_set_nonempty("Channel", &self.channel, &mut errors);
        check_set_nonempty("Network", &self.network, &mut errors);
        // Blank location codes are legal; no check.
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- construction --

    #[test]
    fn default_site_is_empty_and_valid() {
        let site = Site::default();
        assert!(site.is_empty());
        assert!(site.is_valid());
    }

    #[test]
    fn new_assigns_every_code() {
        let site = Site::new("BMN", "HHZ", "LB", "01");
        assert_eq!(site.station.as_deref(), Some("BMN"));
        assert_eq!(site.channel.as_deref(), Some("HHZ"));
        assert_eq!(site.network.as_deref(), Some("LB"));
        assert_eq!(site.location.as_deref(), Some("01"));
        assert!(!site.is_empty());
    }

    #[test]
    fn partial_site_is_not_empty() {
        let site = Site {
            station: Some("BMN".to_string()),
            ..Site::default()
        };
        assert!(!site.is_empty());
    }

    // -- wire form --

    #[test]
    fn encodes_with_wire_keys() {
        let site = Site::new("BMN", "HHZ", "LB", "01");
        let value = site.to_value().unwrap();
        assert_eq!(value["Station"], "BMN");
        assert_eq!(value["Channel"], "HHZ");
        assert_eq!(value["Network"], "LB");
        assert_eq!(value["Location"], "01");
    }

    #[test]
    fn unset_codes_are_omitted() {
        let site = Site {
            station: Some("BMN".to_string()),
            ..Site::default()
        };
        let json = site.to_json().unwrap();
        assert_eq!(json, r#"{"Station":"BMN"}"#);
    }

    #[test]
    fn decodes_missing_keys_as_unset() {
        let site = Site::from_json(r#"{"Station":"BMN","Network":"LB"}"#).unwrap();
        assert_eq!(site.station.as_deref(), Some("BMN"));
        assert_eq!(site.channel, None);
        assert_eq!(site.location, None);
    }

    #[test]
    fn decodes_empty_object_as_empty_site() {
        let site = Site::from_json("{}").unwrap();
        assert!(site.is_empty());
    }

    #[test]
    fn ignores_unknown_keys() {
        let site = Site::from_json(r#"{"Station":"BMN","Telemetry":"vsat"}"#).unwrap();
        assert_eq!(site.station.as_deref(), Some("BMN"));
    }

    #[test]
    fn rejects_wrong_typed_code() {
        assert!(Site::from_json(r#"{"Station":17}"#).is_err());
    }

    // -- validation --

    #[test]
    fn empty_string_station_is_invalid() {
        let site = Site {
            station: Some(String::new()),
            ..Site::default()
        };
        let errors = site.validation_errors();
        assert_eq!(errors, vec![ValidationError::EmptyText { field: "Station" }]);
    }

    #[test]
    fn blank_location_is_valid() {
        let site = Site {
            location: Some(String::new()),
            ..Site::default()
        };
        assert!(site.is_valid());
    }
}
