//! # StationInfo — Station Metadata and Its Request
//!
//! `StationInfo` is the answer half of a metadata exchange: where a
//! station sits, how trusted its data is, and whether processing should
//! use it. `StationInfoRequest` is the question half, carrying the site to
//! look up and the requester's attribution. They share this module because
//! neither is meaningful without the other.

use serde::{Deserialize, Serialize};
use seiswire_core::error::ValidationError;
use seiswire_core::validate::{
    check_min, check_range, check_required_number, check_required_text, check_set_nonempty,
    nest_errors, Validate,
};

use crate::codec::JsonCodec;
use crate::site::Site;
use crate::source::Source;

/// A station metadata record.
///
/// Position is the point of the message, so `latitude`, `longitude`, and
/// `elevation` are required by validation; the quality and usage flags
/// are advisory and optional.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationInfo {
    /// The station the record describes.
    #[serde(default, skip_serializing_if = "Site::is_empty")]
    pub site: Site,
    /// Station latitude in decimal degrees, -90 to 90. Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub latitude: Option<f64>,
    /// Station longitude in decimal degrees, -180 to 180. Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub longitude: Option<f64>,
    /// Station elevation in meters. Required.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation: Option<f64>,
    /// Data quality measure, non-negative.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quality: Option<f64>,
    /// Whether the station is enabled for processing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable: Option<bool>,
    /// Whether the station should be used for teleseismic processing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_for_teleseismic: Option<bool>,
    /// Who asked for this record, when it answers a request.
    #[serde(default, skip_serializing_if = "Source::is_empty")]
    pub information_requestor: Source,
}

impl StationInfo {
    /// Start building a station record field by field.
    pub fn builder() -> StationInfoBuilder {
        StationInfoBuilder::default()
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.site.is_empty()
            && self.latitude.is_none()
            && self.longitude.is_none()
            && self.elevation.is_none()
            && self.quality.is_none()
            && self.enable.is_none()
            && self.use_for_teleseismic.is_none()
            && self.information_requestor.is_empty()
    }
}

impl JsonCodec for StationInfo {}

impl Validate for StationInfo {
    fn validation_errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        nest_errors("Site", self.site.validation_errors(), &mut errors);
        match self.latitude {
            None => errors.push(ValidationError::Missing { field: "Latitude" }),
            set => check_range("Latitude", set, -90.0, 90.0, &mut errors),
        }
        match self.longitude {
            None => errors.push(ValidationError::Missing { field: "Longitude" }),
            set => check_range("Longitude", set, -180.0, 180.0, &mut errors),
        }
        check_required_number("Elevation", self.elevation, &mut errors);
        check_min("Quality", self.quality, 0.0, &mut errors);
        nest_errors(
            "InformationRequestor",
            self.information_requestor.validation_errors(),
            &mut errors,
        );
        errors
    }
}

/// Chainable constructor for [`StationInfo`]. `build` does not validate.
#[derive(Debug, Default)]
pub struct StationInfoBuilder {
    message: StationInfo,
}

impl StationInfoBuilder {
    /// Set the station being described.
    pub fn site(mut self, site: Site) -> Self {
        self.message.site = site;
        self
    }

    /// Set the station latitude.
    pub fn latitude(mut self, latitude: f64) -> Self {
        self.message.latitude = Some(latitude);
        self
    }

    /// Set the station longitude.
    pub fn longitude(mut self, longitude: f64) -> Self {
        self.message.longitude = Some(longitude);
        self
    }

    /// Set the station elevation.
    pub fn elevation(mut self, elevation: f64) -> Self {
        self.message.elevation = Some(elevation);
        self
    }

    /// Set the data quality measure.
    pub fn quality(mut self, quality: f64) -> Self {
        self.message.quality = Some(quality);
        self
    }

    /// Set the processing-enabled flag.
    pub fn enable(mut self, enable: bool) -> Self {
        self.message.enable = Some(enable);
        self
    }

    /// Set the teleseismic-use flag.
    pub fn use_for_teleseismic(mut self, use_for_teleseismic: bool) -> Self {
        self.message.use_for_teleseismic = Some(use_for_teleseismic);
        self
    }

    /// Set the requester this record answers.
    pub fn information_requestor(mut self, requestor: Source) -> Self {
        self.message.information_requestor = requestor;
        self
    }

    /// Finalize the message. No validation happens here.
    pub fn build(self) -> StationInfo {
        self.message
    }
}

/// A request for a station's metadata.
///
/// The lookup key is the station and network pair, and a request must say
/// who is asking, so `site.station`, `site.network`, and both source
/// parts are required by validation.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StationInfoRequest {
    /// The station being asked about.
    #[serde(default, skip_serializing_if = "Site::is_empty")]
    pub site: Site,
    /// Who is asking. Both parts are required.
    #[serde(default, skip_serializing_if = "Source::is_empty")]
    pub source: Source,
}

impl StationInfoRequest {
    /// Construct a complete request.
    pub fn new(site: Site, source: Source) -> Self {
        Self { site, source }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.site.is_empty() && self.source.is_empty()
    }
}

impl JsonCodec for StationInfoRequest {}

impl Validate for StationInfoRequest {
    fn validation_errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        let mut site_errors = Vec::new();
        check_required_text("Station", &self.site.station, &mut site_errors);
        check_set_nonempty("Channel", &self.site.channel, &mut site_errors);
        check_required_text("Network", &self.site.network, &mut site_errors);
        nest_errors("Site", site_errors, &mut errors);
        nest_errors("Source", self.source.required_field_errors(), &mut errors);
        errors
    }
}
