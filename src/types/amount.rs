// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong type for exact wad amounts
//!
//! A wad amount is an exact count of wei: the coin value scaled by 10^18.

use alloy_primitives::U256;
use bigdecimal::BigDecimal;
use num_bigint::{BigInt, Sign};
use num_traits::{Signed, Zero};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::config::constants::WAD_DECIMALS;
use crate::errors::WadError;

/// An exact amount of wei with arbitrary precision
///
/// Amounts are produced by the parser ([`parse`](crate::parse) and its
/// sign-checked variants) or by the unit constructors, and are never mutated
/// afterwards. No arithmetic operators are defined; work on
/// [`as_bigint`](Self::as_bigint) when arithmetic is needed.
///
/// Serializes as a base-10 string of wei.
///
/// # Examples
///
/// ```
/// use wadscale::{parse, FixedPointAmount};
///
/// let amount = parse("1.5").unwrap();
/// assert_eq!(amount.as_bigint().to_string(), "1500000000000000000");
/// assert_eq!(amount.to_string(), "1.5 Coin");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct FixedPointAmount(BigInt);

impl FixedPointAmount {
    /// Zero wei
    pub const ZERO: Self = Self(BigInt::ZERO);

    /// Wrap an exact number of wei
    pub const fn from_wei(wei: BigInt) -> Self {
        Self(wei)
    }

    /// Parse a base-10 count of wei, with an optional leading `-`
    ///
    /// This reads raw wei, not coin decimals; use [`parse`](crate::parse) for
    /// human-entered amounts.
    ///
    /// # Examples
    ///
    /// ```
    /// use wadscale::FixedPointAmount;
    ///
    /// let amount = FixedPointAmount::from_wei_str("1000000000").unwrap();
    /// assert_eq!(amount.to_string(), "1 GWei");
    /// assert!(FixedPointAmount::from_wei_str("1.5").is_err());
    /// ```
    pub fn from_wei_str(wei: &str) -> Result<Self, WadError> {
        let digits = wei.strip_prefix('-').unwrap_or(wei);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(WadError::malformed_number(wei));
        }
        BigInt::parse_bytes(wei.as_bytes(), 10)
            .map(Self)
            .ok_or_else(|| WadError::malformed_number(wei))
    }

    /// Get the inner integer (in wei)
    pub fn as_bigint(&self) -> &BigInt {
        &self.0
    }

    /// Consume the amount, returning the inner integer (in wei)
    pub fn into_bigint(self) -> BigInt {
        self.0
    }

    /// Check if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the amount is below zero
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Exact coin-denominated value (wei / 10^18) as a `BigDecimal`
    ///
    /// Suitable for storage columns that keep decimal values.
    ///
    /// # Examples
    ///
    /// ```
    /// use bigdecimal::BigDecimal;
    /// use std::str::FromStr;
    /// use wadscale::parse;
    ///
    /// let amount = parse("1230.00123").unwrap();
    /// assert_eq!(amount.to_coin_decimal(), BigDecimal::from_str("1230.00123").unwrap());
    /// ```
    pub fn to_coin_decimal(&self) -> BigDecimal {
        BigDecimal::new(self.0.clone(), WAD_DECIMALS as i64)
    }
}

impl From<u64> for FixedPointAmount {
    fn from(wei: u64) -> Self {
        Self(BigInt::from(wei))
    }
}

impl From<BigInt> for FixedPointAmount {
    fn from(wei: BigInt) -> Self {
        Self(wei)
    }
}

impl From<U256> for FixedPointAmount {
    fn from(wei: U256) -> Self {
        Self(BigInt::from_bytes_be(Sign::Plus, &wei.to_be_bytes::<32>()))
    }
}

impl TryFrom<&FixedPointAmount> for U256 {
    type Error = WadError;

    fn try_from(amount: &FixedPointAmount) -> Result<Self, Self::Error> {
        let (sign, bytes) = amount.0.to_bytes_be();
        if sign == Sign::Minus {
            return Err(WadError::out_of_range(&amount.0, "U256"));
        }
        U256::try_from_be_slice(&bytes).ok_or_else(|| WadError::out_of_range(&amount.0, "U256"))
    }
}

impl std::fmt::Display for FixedPointAmount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&crate::wad::format(self))
    }
}

impl Serialize for FixedPointAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for FixedPointAmount {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wei = String::deserialize(deserializer)?;
        Self::from_wei_str(&wei).map_err(serde::de::Error::custom)
    }
}
