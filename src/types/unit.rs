// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Display units for wad amounts

use num_bigint::BigInt;

use crate::config::constants::{GWEI_DECIMALS, ONE_COIN, ONE_GWEI, ONE_WEI, WAD_DECIMALS};

/// Unit a wad amount is displayed in
///
/// Ordered from smallest to largest, so `DisplayUnit::Wei < DisplayUnit::Coin`.
///
/// # Examples
///
/// ```
/// use wadscale::DisplayUnit;
///
/// assert_eq!(DisplayUnit::GWei.decimals(), 9);
/// assert_eq!(DisplayUnit::Coin.label(), "Coin");
/// assert!(DisplayUnit::Wei < DisplayUnit::GWei);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DisplayUnit {
    /// The indivisible base unit
    Wei,
    /// 10^9 wei
    GWei,
    /// 10^18 wei
    Coin,
}

impl DisplayUnit {
    /// All units, largest first. The unit selector walks them in this order.
    pub const DESCENDING: [DisplayUnit; 3] =
        [DisplayUnit::Coin, DisplayUnit::GWei, DisplayUnit::Wei];

    /// Power of ten this unit scales wei by
    pub const fn decimals(self) -> u32 {
        match self {
            DisplayUnit::Wei => 0,
            DisplayUnit::GWei => GWEI_DECIMALS as u32,
            DisplayUnit::Coin => WAD_DECIMALS as u32,
        }
    }

    /// Label appended to formatted amounts
    pub const fn label(self) -> &'static str {
        match self {
            DisplayUnit::Wei => "Wei",
            DisplayUnit::GWei => "GWei",
            DisplayUnit::Coin => "Coin",
        }
    }

    /// Number of wei in one of this unit
    pub fn scale(self) -> &'static BigInt {
        match self {
            DisplayUnit::Wei => &ONE_WEI,
            DisplayUnit::GWei => &ONE_GWEI,
            DisplayUnit::Coin => &ONE_COIN,
        }
    }

    /// Largest unit, not above `largest`, whose scale does not exceed `magnitude`
    ///
    /// Falls back to [`DisplayUnit::Wei`] for magnitudes below one GWei.
    pub fn select(magnitude: &BigInt, largest: DisplayUnit) -> DisplayUnit {
        Self::DESCENDING
            .into_iter()
            .filter(|unit| *unit <= largest)
            .find(|unit| magnitude >= unit.scale())
            .unwrap_or(DisplayUnit::Wei)
    }
}

impl std::fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
