//! Error types for the wadscale library.
//!
//! This module provides strongly-typed errors for all public APIs in wadscale.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling (`WadError`,
//!   `ValidationError`)
//! - **Unified error type** (`WadscaleError`) for convenience when you don't need
//!   to distinguish between error sources
//!
//! # Architecture
//!
//! - [`WadError`] - Errors from a single conversion (normalizing, sign policy,
//!   integer range)
//! - [`ValidationError`] - Every [`FieldError`] collected by a
//!   [`BatchValidator`](crate::BatchValidator)
//!
//! # Examples
//!
//! ## Fine-grained error handling
//!
//! ```rust
//! use wadscale::{parse, WadError};
//!
//! match parse("1.") {
//!     Ok(amount) => println!("Parsed: {amount}"),
//!     Err(WadError::MalformedNumber { input }) => eprintln!("Not a decimal: {input:?}"),
//!     Err(e) => eprintln!("Other error: {e}"),
//! }
//! ```
//!
//! ## Using the unified error type
//!
//! ```rust
//! use wadscale::{parse, BatchValidator, SignPolicy, WadscaleError};
//!
//! fn total_inputs(amount: &str, fee: &str) -> Result<String, WadscaleError> {
//!     let mut batch = BatchValidator::new();
//!     let amount = batch.parse("amount", amount, SignPolicy::StrictlyPositive);
//!     let fee = batch.parse("fee", fee, SignPolicy::NonNegative);
//!     batch.finish()?;
//!     // Both fields are present once finish() succeeded
//!     let single = parse("1")?;
//!     Ok(format!("{amount:?} {fee:?} {single}"))
//! }
//!
//! assert!(total_inputs("1", "x").is_err());
//! ```

mod validation;
mod wad;

pub use validation::{FieldError, ValidationError};
pub use wad::WadError;

/// Unified error type for all wadscale operations.
///
/// All module-specific error types automatically convert to `WadscaleError` via
/// `From` implementations, so you can use `?` to propagate errors naturally.
#[derive(Debug, thiserror::Error)]
pub enum WadscaleError {
    /// Error from a single conversion.
    #[error("Conversion error: {0}")]
    Wad(#[from] WadError),

    /// Error from batch validation.
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}
