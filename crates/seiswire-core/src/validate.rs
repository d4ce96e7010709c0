//! # Lazy Validation
//!
//! Messages and sub-objects are free-form containers: any field may be set
//! to any representable value at any time, and nothing is checked at
//! construction or assignment. Validity is a question asked on demand
//! through the [`Validate`] trait, so a message may legally pass through
//! invalid intermediate states while it is being assembled.
//!
//! The `check_*` helpers are the shared bricks the per-type
//! `validation_errors` implementations are built from. Each helper checks
//! one rule for one field and pushes at most one [`ValidationError`]; unset
//! fields pass every non-`required` check.

use crate::error::{ValidationError, ValidationFailure};
use crate::vocab::Vocabulary;

/// On-demand semantic validation.
///
/// `validation_errors` is the one required method; it reports every rule
/// violation in the value, not just the first. `is_valid` and `validate`
/// are conveniences over it. None of the three ever panics or mutates.
pub trait Validate {
    /// Collect every domain-rule violation in this value.
    ///
    /// An empty vector means the value is valid.
    fn validation_errors(&self) -> Vec<ValidationError>;

    /// True when [`Validate::validation_errors`] finds nothing.
    fn is_valid(&self) -> bool {
        self.validation_errors().is_empty()
    }

    /// Validity as a `Result`, for call sites that propagate with `?`.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationFailure`] carrying every violation found.
    fn validate(&self) -> Result<(), ValidationFailure> {
        let errors = self.validation_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationFailure { errors })
        }
    }
}

/// Check a set numeric field against a closed range.
///
/// Unset passes. A set value must be finite and within `[min, max]`.
pub fn check_range(
    field: &'static str,
    value: Option<f64>,
    min: f64,
    max: f64,
    errors: &mut Vec<ValidationError>,
) {
    if let Some(v) = value {
        if !v.is_finite() {
            errors.push(ValidationError::NotFinite { field, value: v });
        } else if v < min || v > max {
            errors.push(ValidationError::OutOfRange {
                field,
                value: v,
                min,
                max,
            });
        }
    }
}

/// Check a set numeric field against a lower bound.
///
/// Unset passes. A set value must be finite and at least `min`.
pub fn check_min(
    field: &'static str,
    value: Option<f64>,
    min: f64,
    errors: &mut Vec<ValidationError>,
) {
    if let Some(v) = value {
        if !v.is_finite() {
            errors.push(ValidationError::NotFinite { field, value: v });
        } else if v < min {
            errors.push(ValidationError::BelowMinimum {
                field,
                value: v,
                min,
            });
        }
    }
}

/// Check that a set numeric field is finite.
///
/// Unset passes. Fields with no range constraint still refuse NaN and the
/// infinities; those are sentinels, not measurements.
pub fn check_finite(field: &'static str, value: Option<f64>, errors: &mut Vec<ValidationError>) {
    if let Some(v) = value {
        if !v.is_finite() {
            errors.push(ValidationError::NotFinite { field, value: v });
        }
    }
}

/// Check a set categorical field against its vocabulary.
///
/// Unset passes. A set label must match a variant of `V` exactly.
pub fn check_label<V: Vocabulary>(
    field: &'static str,
    value: &Option<String>,
    errors: &mut Vec<ValidationError>,
) {
    if let Some(label) = value {
        if V::from_label(label).is_none() {
            errors.push(ValidationError::UnknownLabel {
                field,
                vocabulary: V::NAME,
                label: label.clone(),
            });
        }
    }
}

/// Check that a set text field is non-empty.
///
/// Unset passes. `Some("")` is a degenerate value: "unset" is spelled
/// `None`, never an empty string.
pub fn check_set_nonempty(
    field: &'static str,
    value: &Option<String>,
    errors: &mut Vec<ValidationError>,
) {
    if let Some(text) = value {
        if text.is_empty() {
            errors.push(ValidationError::EmptyText { field });
        }
    }
}

/// Check a text field a message kind requires: it must be set and non-empty.
pub fn check_required_text(
    field: &'static str,
    value: &Option<String>,
    errors: &mut Vec<ValidationError>,
) {
    match value {
        None => errors.push(ValidationError::Missing { field }),
        Some(text) if text.is_empty() => errors.push(ValidationError::EmptyText { field }),
        Some(_) => {}
    }
}

/// Check a numeric field a message kind requires: it must be set and finite.
pub fn check_required_number(
    field: &'static str,
    value: Option<f64>,
    errors: &mut Vec<ValidationError>,
) {
    match value {
        None => errors.push(ValidationError::Missing { field }),
        Some(v) => check_finite(field, Some(v), errors),
    }
}

/// Fold a sub-object's violations into a parent report under its wire key.
pub fn nest_errors(
    field: &'static str,
    sub_errors: Vec<ValidationError>,
    errors: &mut Vec<ValidationError>,
) {
    errors.extend(sub_errors.into_iter().map(|e| e.nested_in(field)));
}
