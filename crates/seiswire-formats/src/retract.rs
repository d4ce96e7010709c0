//! # Retract — Withdrawing a Previous Message
//!
//! A retraction is a tombstone: it tells consumers to discard a message
//! this producer sent earlier. Unlike the detection kinds, a retraction is
//! meaningless without its key, so the id of the withdrawn message and the
//! full attribution of who is withdrawing it are required by validation.

use serde::{Deserialize, Serialize};
use seiswire_core::error::ValidationError;
use seiswire_core::validate::{check_required_text, nest_errors, Validate};

use crate::codec::JsonCodec;
use crate::source::Source;

/// A retraction of a previously sent message.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Retract {
    /// Identifier of the message being withdrawn.
    #[serde(rename = "ID", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Who is withdrawing it. Both parts are required.
    #[serde(default, skip_serializing_if = "Source::is_empty")]
    pub source: Source,
}

impl Retract {
    /// Construct a complete retraction.
    pub fn new(id: impl Into<String>, source: Source) -> Self {
        Self {
            id: Some(id.into()),
            source,
        }
    }

    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.id.is_none() && self.source.is_empty()
    }
}

impl JsonCodec for Retract {}

impl Validate for Retract {
    fn validation_errors(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        check_required_text("ID", &self.id, &mut errors);
        nest_errors("Source", self.source.required_field_errors(), &mut errors);
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complete_retraction_is_valid() {
        let message = Retract::new("12GFH48776857", Source::new("US", "TestAuthor"));
        assert!(message.is_valid());
    }

    #[test]
    fn empty_retraction_decodes_but_is_invalid() {
        let message = Retract::from_json("{}").unwrap();
        assert!(message.is_empty());
        assert_eq!(
            message.validation_errors(),
            vec![
                ValidationError::Missing { field: "ID" },
                ValidationError::Missing { field: "AgencyID" }.nested_in("Source"),
                ValidationError::Missing { field: "Author" }.nested_in("Source"),
            ]
        );
    }

    #[test]
    fn id_alone_is_not_enough() {
        let mut message = Retract::default();
        message.id = Some("12GFH48776857".to_string());
        let errors = message.validation_errors();
        assert_eq!(errors.len(), 2);
        assert!(errors
            .iter()
            .all(|e| matches!(e, ValidationError::Nested { field: "Source", .. })));
    }

    #[test]
    fn empty_id_is_reported_as_empty_text() {
        let message = Retract::new("", Source::new("US", "TestAuthor"));
        assert_eq!(
            message.validation_errors(),
            vec![ValidationError::EmptyText { field: "ID" }]
        );
    }

    #[test]
    fn wire_round_trip() {
        let message = Retract::new("12GFH48776857", Source::new("US", "TestAuthor"));
        let json = message.to_json().unwrap();
        assert_eq!(
            json,
            r#"{"ID":"12GFH48776857","Source":{"AgencyID":"US","Author":"TestAuthor"}}"#
        );
        assert_eq!(Retract::from_json(&json).unwrap(), message);
    }
}
