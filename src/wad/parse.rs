//! Decimal text to wad amounts, and the unit constructors

use num_bigint::BigInt;
use num_traits::{FromPrimitive, ToPrimitive};
use tracing::{debug, error};

use crate::config::constants::ONE_COIN;
use crate::errors::WadError;
use crate::tracing::spans;
use crate::types::amount::FixedPointAmount;

use super::normalize::normalize;
use super::sign::SignPolicy;

/// Parse a decimal coin amount into wei, accepting any value.
///
/// Accepts `digits(.digits)?` with at most 18 fractional digits; the result is
/// exact.
///
/// # Examples
///
/// ```
/// use wadscale::parse;
///
/// assert_eq!(parse("0.001").unwrap().as_bigint().to_string(), "1000000000000000");
/// assert!(parse("0").unwrap().is_zero());
/// assert!(parse("1,5").is_err());
/// ```
pub fn parse(amount: &str) -> Result<FixedPointAmount, WadError> {
    parse_with_policy(amount, SignPolicy::Unconstrained)
}

/// Parse a decimal coin amount into wei, rejecting negative values.
pub fn parse_non_negative(amount: &str) -> Result<FixedPointAmount, WadError> {
    parse_with_policy(amount, SignPolicy::NonNegative)
}

/// Parse a decimal coin amount into wei, rejecting zero and negative values.
///
/// # Examples
///
/// ```
/// use wadscale::{parse_positive, WadError};
///
/// assert!(parse_positive("0.000000000000000001").is_ok());
/// assert!(matches!(parse_positive("0.000"), Err(WadError::SignViolation { .. })));
/// ```
pub fn parse_positive(amount: &str) -> Result<FixedPointAmount, WadError> {
    parse_with_policy(amount, SignPolicy::StrictlyPositive)
}

/// Parse a decimal coin amount into wei under the given sign policy.
///
/// # Errors
///
/// - [`WadError::MalformedNumber`] and [`WadError::PrecisionExceeded`] from
///   [`normalize`]
/// - [`WadError::SignViolation`] when the value breaks `policy`
///
/// # Panics
///
/// If a canonical coin string is not a base-10 integer. The normalizer only
/// emits digits, so this is a bug rather than bad input.
pub fn parse_with_policy(amount: &str, policy: SignPolicy) -> Result<FixedPointAmount, WadError> {
    let span = spans::parse_amount(policy, amount.len());
    let _guard = span.enter();

    let canonical =
        normalize(amount).inspect_err(|e| debug!(error = %e, "Rejected decimal amount"))?;
    policy
        .enforce(&canonical)
        .inspect_err(|e| debug!(error = %e, canonical = %canonical, "Rejected by sign policy"))?;

    let Some(wei) = BigInt::parse_bytes(canonical.as_bytes(), 10) else {
        error!(input = %amount, canonical = %canonical, "Canonical coin string is not an integer");
        panic!("canonical coin string {canonical:?} for {amount:?} is not a base-10 integer");
    };
    Ok(FixedPointAmount::from_wei(wei))
}

/// Convert a whole number of coins to wei. Exact.
///
/// # Examples
///
/// ```
/// use wadscale::{from_units, to_units};
///
/// let amount = from_units(999);
/// assert_eq!(amount.as_bigint().to_string(), "999000000000000000000");
/// assert_eq!(to_units(&amount), Some(999));
/// ```
pub fn from_units(coins: u64) -> FixedPointAmount {
    FixedPointAmount::from_wei(BigInt::from(coins) * &*ONE_COIN)
}

/// Convert a float number of coins to wei. **Approximate.**
///
/// The value goes through `f64` multiplication, so anything beyond the ~15-17
/// significant digits a double holds is lost, and the product is truncated
/// toward zero. Use [`parse`] when the amount must be exact.
///
/// # Errors
///
/// - [`WadError::NonFiniteFloat`] for NaN and infinities
/// - [`WadError::OutOfRange`] when the product in wei overflows `f64`
///
/// # Examples
///
/// ```
/// use wadscale::from_float_units;
///
/// let amount = from_float_units(0.5).unwrap();
/// assert_eq!(amount.as_bigint().to_string(), "500000000000000000");
/// assert!(from_float_units(f64::NAN).is_err());
/// ```
pub fn from_float_units(coins: f64) -> Result<FixedPointAmount, WadError> {
    const WEI_PER_COIN: f64 = 1e18;

    if !coins.is_finite() {
        return Err(WadError::NonFiniteFloat { value: coins });
    }
    BigInt::from_f64(coins * WEI_PER_COIN)
        .map(FixedPointAmount::from_wei)
        .ok_or_else(|| WadError::out_of_range(coins, "wei"))
}

/// Whole number of coins in an amount, truncated toward zero.
///
/// Returns `None` when the whole-coin count is negative or exceeds `u64::MAX`.
pub fn to_units(amount: &FixedPointAmount) -> Option<u64> {
    (amount.as_bigint() / &*ONE_COIN).to_u64()
}
