//! Wad amounts to unit-scaled display strings
//!
//! Formatting is lossy by design: the largest fitting unit is chosen and the
//! fraction is truncated to the configured number of digits.

use num_traits::Signed;

use crate::config::constants::COIN_ZEROS;
use crate::config::DisplayConfig;
use crate::types::amount::FixedPointAmount;
use crate::types::unit::DisplayUnit;

use super::trim::trim_trailing_zeros;

/// Display string for an exact zero, whatever the configuration
pub const ZERO_DISPLAY: &str = "0 Wei";

/// Format an amount with [`DisplayConfig::default`].
///
/// # Examples
///
/// ```
/// use wadscale::{format, from_units, FixedPointAmount};
///
/// assert_eq!(format(&from_units(10)), "10 Coin");
/// assert_eq!(format(&FixedPointAmount::from(1_000_000_000u64)), "1 GWei");
/// assert_eq!(format(&FixedPointAmount::from(123u64)), "123 Wei");
/// assert_eq!(format(&FixedPointAmount::ZERO), "0 Wei");
/// ```
pub fn format(amount: &FixedPointAmount) -> String {
    format_with(amount, &DisplayConfig::default())
}

/// Format an amount as `<value> <unit>`.
///
/// The unit is the largest of Coin, GWei and Wei, capped by
/// `config.largest_unit`, that does not exceed the magnitude of the amount.
/// The fraction is truncated to `config.max_fraction_digits` and trailing
/// zeros are dropped, so whole values print without a separator.
///
/// # Examples
///
/// ```
/// use wadscale::{format_with, parse, DisplayConfigBuilder, DisplayUnit};
///
/// let amount = parse("1.23456").unwrap();
/// let config = DisplayConfigBuilder::new().max_fraction_digits(2).build();
/// assert_eq!(format_with(&amount, &config), "1.23 Coin");
///
/// let config = DisplayConfigBuilder::new().largest_unit(DisplayUnit::GWei).build();
/// assert_eq!(format_with(&amount, &config), "1234560000 GWei");
/// ```
pub fn format_with(amount: &FixedPointAmount, config: &DisplayConfig) -> String {
    if amount.is_zero() {
        return ZERO_DISPLAY.to_owned();
    }

    let magnitude = amount.as_bigint().abs();
    let unit = DisplayUnit::select(&magnitude, config.largest_unit);
    let whole = &magnitude / unit.scale();

    let sign = if amount.is_negative() { "-" } else { "" };
    let mut rendered = format!("{sign}{whole}");

    let digits = config.fraction_digits_for(unit);
    if digits > 0 {
        let remainder = (&magnitude % unit.scale()).to_string();
        let width = unit.decimals() as usize;
        let padded = format!("{}{remainder}", &COIN_ZEROS[..width - remainder.len()]);
        let fraction = trim_trailing_zeros(&padded[..digits]);
        if !fraction.is_empty() {
            rendered.push('.');
            rendered.push_str(fraction);
        }
    }

    rendered.push(' ');
    rendered.push_str(unit.label());
    rendered
}

#[cfg(test)]
mod tests {
    use num_bigint::BigInt;

    use super::*;
    use crate::config::DisplayConfigBuilder;

    fn wei(digits: &str) -> FixedPointAmount {
        FixedPointAmount::from_wei_str(digits).unwrap()
    }

    #[test]
    fn test_format_scenarios() {
        let one_coin = BigInt::from(10u8).pow(18);
        let one_gwei = BigInt::from(10u8).pow(9);
        let cases = [
            (one_coin.clone(), "1 Coin"),
            (&one_coin * 10u8, "10 Coin"),
            (one_gwei.clone(), "1 GWei"),
            (&one_gwei * 10u8, "10 GWei"),
            (BigInt::from(0u8), "0 Wei"),
            (BigInt::from(1u8), "1 Wei"),
            (BigInt::from(123u8), "123 Wei"),
        ];
        for (value, expected) in cases {
            assert_eq!(format(&FixedPointAmount::from(value)), expected);
        }
    }

    #[test]
    fn test_format_truncates_fraction() {
        assert_eq!(format(&wei("1999999999999999999")), "1.9999 Coin");
        assert_eq!(format(&wei("1500000000000000000")), "1.5 Coin");
        assert_eq!(format(&wei("1000100000000000000")), "1.0001 Coin");
        // Digits beyond the fourth are dropped, leaving a whole value
        assert_eq!(format(&wei("1000010000000000000")), "1 Coin");
        assert_eq!(format(&wei("2500000000")), "2.5 GWei");
    }

    #[test]
    fn test_format_below_one_coin_uses_gwei() {
        assert_eq!(format(&wei("1000000000000000")), "1000000 GWei");
        assert_eq!(format(&wei("999999999")), "999999999 Wei");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format(&wei("-1500000000000000000")), "-1.5 Coin");
        assert_eq!(format(&wei("-7")), "-7 Wei");
    }

    #[test]
    fn test_format_exact_config() {
        let config = DisplayConfig::exact();
        assert_eq!(
            format_with(&wei("22123456789123456789"), &config),
            "22.123456789123456789 Coin"
        );
        assert_eq!(
            format_with(&wei("1000000001"), &config),
            "1.000000001 GWei"
        );
    }

    #[test]
    fn test_format_zero_ignores_config() {
        let config = DisplayConfigBuilder::new()
            .largest_unit(DisplayUnit::GWei)
            .max_fraction_digits(0)
            .build();
        assert_eq!(format_with(&FixedPointAmount::ZERO, &config), ZERO_DISPLAY);
    }

    #[test]
    fn test_format_no_fraction_digits() {
        let config = DisplayConfigBuilder::new().max_fraction_digits(0).build();
        assert_eq!(format_with(&wei("1999999999999999999"), &config), "1 Coin");
    }
}
