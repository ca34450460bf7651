//! Configuration for wadscale display formatting
//!
//! Parsing is exact and takes no options. Display formatting is lossy by
//! design, so how much of the fraction survives and which units may be used
//! are configurable.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use wadscale::DisplayConfig;
//!
//! // Up to 4 fractional digits, any unit up to Coin
//! let config = DisplayConfig::default();
//! assert_eq!(config.max_fraction_digits, 4);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use wadscale::{DisplayConfigBuilder, DisplayUnit};
//!
//! // Gas prices read better in GWei even when they are huge
//! let config = DisplayConfigBuilder::new()
//!     .largest_unit(DisplayUnit::GWei)
//!     .max_fraction_digits(2)
//!     .build();
//! ```

use crate::types::unit::DisplayUnit;

pub mod constants;

/// Default number of fractional digits kept when formatting
pub const DEFAULT_FRACTION_DIGITS: u32 = 4;

/// Configuration for formatting wad amounts as human-readable strings
///
/// Use [`DisplayConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Maximum number of fractional digits shown; extra digits are truncated
    /// Default: 4. Never exceeds the scale of the chosen unit.
    pub max_fraction_digits: u32,

    /// Largest unit the unit selector may choose
    /// Default: [`DisplayUnit::Coin`]
    pub largest_unit: DisplayUnit,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_fraction_digits: DEFAULT_FRACTION_DIGITS,
            largest_unit: DisplayUnit::Coin,
        }
    }
}

impl DisplayConfig {
    /// Config that never drops a digit: the full fraction of the chosen unit is shown
    ///
    /// # Example
    ///
    /// ```rust
    /// use wadscale::{format_with, parse, DisplayConfig};
    ///
    /// let amount = parse("1.000000000000000001").unwrap();
    /// assert_eq!(format_with(&amount, &DisplayConfig::exact()), "1.000000000000000001 Coin");
    /// ```
    pub fn exact() -> Self {
        Self {
            max_fraction_digits: constants::WAD_DECIMALS as u32,
            largest_unit: DisplayUnit::Coin,
        }
    }

    /// Effective number of fractional digits for a given unit
    pub fn fraction_digits_for(&self, unit: DisplayUnit) -> usize {
        self.max_fraction_digits.min(unit.decimals()) as usize
    }
}

/// Builder for [`DisplayConfig`]
#[derive(Debug, Clone, Default)]
pub struct DisplayConfigBuilder {
    config: DisplayConfig,
}

impl DisplayConfigBuilder {
    /// Start from [`DisplayConfig::default`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of fractional digits
    pub fn max_fraction_digits(mut self, digits: u32) -> Self {
        self.config.max_fraction_digits = digits;
        self
    }

    /// Set the largest unit the formatter may choose
    pub fn largest_unit(mut self, unit: DisplayUnit) -> Self {
        self.config.largest_unit = unit;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> DisplayConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DisplayConfig::default();
        assert_eq!(config.max_fraction_digits, DEFAULT_FRACTION_DIGITS);
        assert_eq!(config.largest_unit, DisplayUnit::Coin);
    }

    #[test]
    fn test_builder_overrides() {
        let config = DisplayConfigBuilder::new()
            .max_fraction_digits(9)
            .largest_unit(DisplayUnit::GWei)
            .build();
        assert_eq!(config.max_fraction_digits, 9);
        assert_eq!(config.largest_unit, DisplayUnit::GWei);
    }

    #[test]
    fn test_fraction_digits_clamped_to_unit() {
        let config = DisplayConfig::exact();
        assert_eq!(config.fraction_digits_for(DisplayUnit::Coin), 18);
        assert_eq!(config.fraction_digits_for(DisplayUnit::GWei), 9);
        assert_eq!(config.fraction_digits_for(DisplayUnit::Wei), 0);

        let config = DisplayConfig::default();
        assert_eq!(config.fraction_digits_for(DisplayUnit::Coin), 4);
    }
}
