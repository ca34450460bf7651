//! Decimal text to canonical coin string
//!
//! A canonical coin string is the decimal value scaled by 10^18 and written
//! without a separator, so `"1.2"` becomes `"12"` followed by 17 zeros. An
//! exact zero is always the sentinel `"0"`.

use crate::config::constants::{COIN_ZEROS, WAD_DECIMALS, ZERO_SENTINEL};
use crate::errors::WadError;

use super::trim::{trim_leading_zeros, trim_trailing_zeros};

/// Convert a decimal string into its canonical coin string.
///
/// The input must match `^\d+(\.\d+)?$` with ASCII digits, and carry at most
/// 18 fractional digits. Nothing is rounded: any precision that cannot be
/// represented exactly is an error.
///
/// # Errors
///
/// - [`WadError::MalformedNumber`] for any other shape of text
/// - [`WadError::PrecisionExceeded`] for more than 18 fractional digits
///
/// # Examples
///
/// ```
/// use wadscale::wad::normalize;
///
/// assert_eq!(normalize("00.000").unwrap(), "0");
/// assert_eq!(normalize("1.2").unwrap(), "1200000000000000000");
/// assert_eq!(normalize("0.123456789123456789").unwrap(), "123456789123456789");
/// assert!(normalize(".5").is_err());
/// ```
pub fn normalize(amount: &str) -> Result<String, WadError> {
    let (int_part, frac_part) =
        split_decimal(amount).ok_or_else(|| WadError::malformed_number(amount))?;

    let Some(frac_part) = frac_part else {
        return Ok(scale_whole(trim_leading_zeros(int_part)));
    };
    if frac_part.len() > WAD_DECIMALS {
        return Err(WadError::precision_exceeded(amount, frac_part.len()));
    }

    let int_part = trim_leading_zeros(int_part);
    let frac_part = trim_trailing_zeros(frac_part);
    if frac_part.is_empty() {
        return Ok(scale_whole(int_part));
    }

    let mut canonical = String::with_capacity(int_part.len() + WAD_DECIMALS);
    canonical.push_str(int_part);
    canonical.push_str(frac_part);
    canonical.push_str(&COIN_ZEROS[frac_part.len()..]);
    Ok(canonical)
}

/// Scale a whole number of coins, already stripped of leading zeros.
fn scale_whole(int_part: &str) -> String {
    if int_part.is_empty() {
        return ZERO_SENTINEL.to_owned();
    }
    let mut canonical = String::with_capacity(int_part.len() + WAD_DECIMALS);
    canonical.push_str(int_part);
    canonical.push_str(COIN_ZEROS);
    canonical
}

/// Split `digits(.digits)?` into its integer and fractional parts.
///
/// Returns `None` for any other shape, including an empty part on either side
/// of the separator and a second separator.
fn split_decimal(amount: &str) -> Option<(&str, Option<&str>)> {
    let (int_part, frac_part) = match amount.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (amount, None),
    };
    let is_digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !is_digits(int_part) || !frac_part.map_or(true, is_digits) {
        return None;
    }
    Some((int_part, frac_part))
}
