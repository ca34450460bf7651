//! Sign constraints applied to canonical coin strings

use crate::config::constants::ZERO_SENTINEL;
use crate::errors::WadError;

/// Constraint on the sign of a parsed amount
///
/// The policy is checked against the canonical coin string, after
/// normalization and before the integer is built. It is a property of the
/// parse call, not of the resulting amount.
///
/// The decimal grammar has no sign character, so text never normalizes to a
/// negative value; [`SignPolicy::NonNegative`] only rejects canonical strings
/// that carry a leading `-` from elsewhere.
///
/// # Examples
///
/// ```
/// use wadscale::SignPolicy;
///
/// assert!(SignPolicy::StrictlyPositive.enforce("0").is_err());
/// assert!(SignPolicy::NonNegative.enforce("0").is_ok());
/// assert!(SignPolicy::NonNegative.enforce("-1").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SignPolicy {
    /// Any value is accepted
    #[default]
    Unconstrained,
    /// Negative values are rejected
    NonNegative,
    /// Zero and negative values are rejected
    StrictlyPositive,
}

impl SignPolicy {
    /// Check a canonical coin string against this policy
    pub fn enforce(self, canonical: &str) -> Result<(), WadError> {
        let negative = canonical.starts_with('-');
        let rejected = match self {
            SignPolicy::Unconstrained => false,
            SignPolicy::NonNegative => negative,
            SignPolicy::StrictlyPositive => negative || canonical == ZERO_SENTINEL,
        };
        if rejected {
            return Err(WadError::sign_violation(self));
        }
        Ok(())
    }

    /// Human-readable requirement, used in error messages
    pub const fn requirement(self) -> &'static str {
        match self {
            SignPolicy::Unconstrained => "may take any value",
            SignPolicy::NonNegative => "must not be negative",
            SignPolicy::StrictlyPositive => "must be positive",
        }
    }
}

impl std::fmt::Display for SignPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.requirement())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unconstrained_accepts_everything() {
        for canonical in ["0", "1000000000000000000", "-1"] {
            assert!(SignPolicy::Unconstrained.enforce(canonical).is_ok());
        }
    }

    #[test]
    fn test_non_negative() {
        assert!(SignPolicy::NonNegative.enforce("0").is_ok());
        assert!(SignPolicy::NonNegative.enforce("1200000000000000000").is_ok());
        assert_eq!(
            SignPolicy::NonNegative.enforce("-1200000000000000000"),
            Err(WadError::sign_violation(SignPolicy::NonNegative))
        );
    }

    #[test]
    fn test_strictly_positive() {
        assert!(SignPolicy::StrictlyPositive.enforce("1").is_ok());
        assert_eq!(
            SignPolicy::StrictlyPositive.enforce("0"),
            Err(WadError::sign_violation(SignPolicy::StrictlyPositive))
        );
        assert!(SignPolicy::StrictlyPositive.enforce("-5").is_err());
    }

    #[test]
    fn test_error_message() {
        let err = SignPolicy::StrictlyPositive.enforce("0").unwrap_err();
        assert_eq!(err.to_string(), "Sign violation: amount must be positive");
    }
}
