//! Batch validation of several amount fields
//!
//! Conversions return `Result`s. A [`BatchValidator`] sits at the caller's
//! boundary and folds many of them into one report, so every bad field can be
//! surfaced at once instead of stopping at the first.

use tracing::debug;

use crate::errors::{FieldError, ValidationError, WadError};
use crate::tracing::spans;
use crate::types::amount::FixedPointAmount;

use super::parse::parse_with_policy;
use super::sign::SignPolicy;

/// Collects per-field conversion errors
///
/// # Examples
///
/// ```
/// use wadscale::{BatchValidator, SignPolicy};
///
/// let mut batch = BatchValidator::new();
/// let amount = batch.parse("amount", "2.5", SignPolicy::StrictlyPositive);
/// let fee = batch.parse("fee", "0", SignPolicy::NonNegative);
/// batch.finish().unwrap();
///
/// assert_eq!(amount.unwrap().to_string(), "2.5 Coin");
/// assert!(fee.unwrap().is_zero());
/// ```
#[derive(Debug, Default)]
pub struct BatchValidator {
    errors: Vec<FieldError>,
}

impl BatchValidator {
    /// Create an empty validator
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the outcome of any conversion for `field`
    ///
    /// Returns the value on success. On failure the error is recorded and
    /// `None` is returned.
    pub fn check<T>(&mut self, field: impl Into<String>, result: Result<T, WadError>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(source) => {
                let field = field.into();
                debug!(field = %field, error = %source, "Field failed validation");
                self.errors.push(FieldError { field, source });
                None
            }
        }
    }

    /// Parse `amount` under `policy`, recording any failure against `field`
    pub fn parse(
        &mut self,
        field: impl Into<String>,
        amount: &str,
        policy: SignPolicy,
    ) -> Option<FixedPointAmount> {
        let field = field.into();
        let span = spans::validate_field(&field);
        let _guard = span.enter();
        let result = parse_with_policy(amount, policy);
        self.check(field, result)
    }

    /// Whether no errors have been recorded so far
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty()
    }

    /// Errors recorded so far, in order
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Finish the batch, failing with every recorded error
    pub fn finish(self) -> Result<(), ValidationError> {
        if self.errors.is_empty() {
            return Ok(());
        }
        Err(ValidationError::new(self.errors))
    }
}
