//! Error types for batch validation.
//!
//! Callers validating several amount fields at once (a form, a command line,
//! a request body) collect every field's failure before giving up. These types
//! carry that report.

use super::WadError;

/// A single rejected field.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{field}: {source}")]
pub struct FieldError {
    /// Name of the field as the caller knows it
    pub field: String,
    /// Why the field was rejected
    #[source]
    pub source: WadError,
}

/// Every field error found during one batch validation.
///
/// Never empty: a batch with no errors finishes with `Ok`.
///
/// # Examples
///
/// ```rust
/// use wadscale::{BatchValidator, SignPolicy};
///
/// let mut batch = BatchValidator::new();
/// let amount = batch.parse("amount", "1.5", SignPolicy::StrictlyPositive);
/// let fee = batch.parse("fee", "0.1a", SignPolicy::NonNegative);
/// let tip = batch.parse("tip", "0", SignPolicy::StrictlyPositive);
///
/// assert!(amount.is_some());
/// assert!(fee.is_none() && tip.is_none());
///
/// let report = batch.finish().unwrap_err();
/// assert_eq!(report.errors().len(), 2);
/// assert_eq!(report.errors()[0].field, "fee");
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{} invalid field(s): {}", .errors.len(), join_field_errors(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub(crate) fn new(errors: Vec<FieldError>) -> Self {
        debug_assert!(!errors.is_empty());
        Self { errors }
    }

    /// Field errors in the order they were recorded
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Consume the report, returning the field errors
    pub fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
