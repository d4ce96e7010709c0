//! # Source — Who Produced a Message
//!
//! Attribution for a message: the reporting agency and the author within
//! it. Both parts are optional in general; the message kinds that make
//! attribution mandatory (retractions, station-info requests) impose that
//! through [`Source::required_field_errors`].

use serde::{Deserialize, Serialize};
use seiswire_core::error::ValidationError;
use seiswire_core::validate::{check_required_text, check_set_nonempty, Validate};

use crate::codec::JsonCodec;

/// The agency and author a message is attributed to.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Source {
    /// Reporting agency identifier (e.g. `"US"`).
    #[serde(rename = "AgencyID", default, skip_serializing_if = "Option::is_none")]
    pub agency_id: Option<String>,
    /// Author within the agency, human or process.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Source {
    /// Construct a source with both parts set, verbatim and unchecked.
    pub fn new(agency_id: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            agency_id: Some(agency_id.into()),
            author: Some(author.into()),
        }
    }

    /// True when neither part is set.
    pub fn is_empty(&self) -> bool {
        self.agency_id.is_none() && self.author.is_none()
    }

    /// Violations of the full-attribution rule some message kinds impose:
    /// both `AgencyID` and `Author` must be set and non-empty.
    ///
    /// This is not part of [`Validate`] for `Source` itself: an empty
    /// source is a valid sub-object, and it is the owning message kind
    /// that may refuse it.
    pub fn required_field_errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_required_text("AgencyID", &self.agency_id, &mut errors);
        check_required_text("Author", &self.author, &mut errors);
        errors
    }
}

impl JsonCodec for Source {}

impl Validate for Source {
    fn validation_errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_set_nonempty("AgencyID", &self.agency_id, &mut errors);
        check_set_nonempty("Author", &self.author, &mut errors);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_source_is_empty_and_valid() {
        let source = Source::default();
        assert!(source.is_empty());
        assert!(source.is_valid());
    }

    #[test]
    fn agency_id_uses_its_acronym_wire_key() {
        let source = Source::new("US", "TestAuthor");
        let json = source.to_json().unwrap();
        assert_eq!(json, r#"{"AgencyID":"US","Author":"TestAuthor"}"#);
    }

    #[test]
    fn decodes_partial_attribution() {
        let source = Source::from_json(r#"{"Author":"autopicker-3"}"#).unwrap();
        assert_eq!(source.agency_id, None);
        assert_eq!(source.author.as_deref(), Some("autopicker-3"));
        assert!(source.is_valid());
    }

    #[test]
    fn empty_string_parts_are_invalid() {
        let source = Source {
            agency_id: Some(String::new()),
            author: Some("x".to_string()),
        };
        assert_eq!(
            source.validation_errors(),
            vec![ValidationError::EmptyText { field: "AgencyID" }]
        );
    }

    #[test]
    fn required_field_errors_flag_both_missing_parts() {
        let errors = Source::default().required_field_errors();
        assert_eq!(
            errors,
            vec![
                ValidationError::Missing { field: "AgencyID" },
                ValidationError::Missing { field: "Author" },
            ]
        );
    }

    #[test]
    fn required_field_errors_pass_full_attribution() {
        assert!(Source::new("US", "TestAuthor").required_field_errors().is_empty());
    }
}
