//! Span creation helpers for wadscale operations.
//!
//! Telemetry concerns are kept out of the conversion code. Instead of using
//! `#[instrument]` attributes directly on functions, each instrumented operation
//! has a corresponding span helper function in this module.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub fn my_operation(param: Type) -> Result<T, WadError> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Conversion logic here
//! }
//! ```

use tracing::Span;

use crate::wad::sign::SignPolicy;

/// Create span for parsing one decimal amount.
///
/// Parent: validate_field span when parsed through a batch, otherwise the caller's span
/// Children: None
#[inline]
pub(crate) fn parse_amount(policy: SignPolicy, input_len: usize) -> Span {
    tracing::trace_span!(
        "wadscale.parse_amount",
        policy = ?policy,
        input_len = input_len,
    )
}

/// Create span for validating one named field of a batch.
///
/// Parent: None (callers own the batch)
/// Children: parse_amount span
#[inline]
pub(crate) fn validate_field(field: &str) -> Span {
    tracing::debug_span!("wadscale.validate_field", field = %field)
}
