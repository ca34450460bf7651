//! Error types for wad conversions.
//!
//! This module provides the error type for the `wad` module: normalizing
//! decimal text, enforcing sign policies and converting amounts between
//! representations.

use crate::wad::sign::SignPolicy;

/// Errors that can occur while converting between decimal text and wad amounts.
///
/// Every variant is a recoverable validation error. The input is rejected and
/// the caller is expected to supply corrected text; retrying with the same
/// input fails the same way.
///
/// # Examples
///
/// ```rust
/// use wadscale::{parse_positive, WadError};
///
/// match parse_positive("0.1234567891234567891") {
///     Ok(amount) => println!("Parsed: {amount}"),
///     Err(WadError::PrecisionExceeded { digits, .. }) => {
///         eprintln!("{digits} fractional digits given, at most 18 allowed");
///     }
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WadError {
    /// The text is not of the form `digits(.digits)?`.
    ///
    /// Covers empty strings, whitespace, signs, non-digit characters, a
    /// missing integer or fractional part around the separator and repeated
    /// separators.
    #[error("Malformed decimal number: {input:?}")]
    MalformedNumber {
        /// The rejected text
        input: String,
    },

    /// More than 18 digits follow the decimal separator.
    ///
    /// Amounts are never rounded, so precision that cannot be represented
    /// exactly is an error.
    #[error("Too many decimal places in {input:?}: {digits} given, maximum 18 after the separator")]
    PrecisionExceeded {
        /// The rejected text
        input: String,
        /// Number of fractional digits supplied
        digits: usize,
    },

    /// The value does not satisfy the requested sign policy.
    #[error("Sign violation: amount {policy}")]
    SignViolation {
        /// The policy that rejected the value
        policy: SignPolicy,
    },

    /// A float constructor received NaN or an infinity.
    #[error("Cannot convert non-finite float {value} to wei")]
    NonFiniteFloat {
        /// The rejected float
        value: f64,
    },

    /// An amount does not fit the requested integer type.
    #[error("Amount {amount} wei is out of range for {target}")]
    OutOfRange {
        /// The amount, in wei
        amount: String,
        /// Name of the target type
        target: &'static str,
    },
}

impl WadError {
    /// Create a `MalformedNumber` error for the given text.
    pub fn malformed_number(input: impl Into<String>) -> Self {
        WadError::MalformedNumber {
            input: input.into(),
        }
    }

    /// Create a `PrecisionExceeded` error for the given text.
    pub fn precision_exceeded(input: impl Into<String>, digits: usize) -> Self {
        WadError::PrecisionExceeded {
            input: input.into(),
            digits,
        }
    }

    /// Create a `SignViolation` error for the given policy.
    pub fn sign_violation(policy: SignPolicy) -> Self {
        WadError::SignViolation { policy }
    }

    /// Create an `OutOfRange` error.
    pub fn out_of_range(amount: impl std::fmt::Display, target: &'static str) -> Self {
        WadError::OutOfRange {
            amount: amount.to_string(),
            target,
        }
    }
}
