// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Scale constants shared by the parser and the formatter
//!
//! This module centralizes the decimal scales of the wad representation so the
//! normalizer, the unit selector and the constructors agree on a single source.

use std::sync::LazyLock;

use num_bigint::BigInt;

/// Number of fractional decimal digits carried by a wad amount (1 Coin = 10^18 wei)
pub const WAD_DECIMALS: usize = 18;

/// Number of fractional decimal digits of a GWei relative to wei (1 GWei = 10^9 wei)
pub const GWEI_DECIMALS: usize = 9;

/// Canonical value of an exact zero.
///
/// The normalizer emits this instead of a scaled string of zeros.
pub const ZERO_SENTINEL: &str = "0";

/// Eighteen zeros. Slicing `COIN_ZEROS[n..]` yields the padding needed to
/// widen `n` fractional digits to a full wad.
pub(crate) const COIN_ZEROS: &str = "000000000000000000";

/// One wei
pub(crate) static ONE_WEI: LazyLock<BigInt> = LazyLock::new(|| BigInt::from(1u8));

/// One GWei in wei (10^9)
pub(crate) static ONE_GWEI: LazyLock<BigInt> =
    LazyLock::new(|| BigInt::from(10u8).pow(GWEI_DECIMALS as u32));

/// One Coin in wei (10^18)
pub(crate) static ONE_COIN: LazyLock<BigInt> =
    LazyLock::new(|| BigInt::from(10u8).pow(WAD_DECIMALS as u32));
