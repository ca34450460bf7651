// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for wad conversions
//!
//! These tests use proptest to validate invariants of parsing and formatting
//! across a wide range of inputs.

use num_bigint::BigInt;
use proptest::prelude::*;
use wadscale::{format_with, from_units, normalize, parse, to_units, DisplayConfig, WadError};

// Helper to generate well-formed decimal strings with at most 18 fractional digits
fn arb_decimal() -> impl Strategy<Value = (String, Option<String>)> {
    ("[0-9]{1,30}", proptest::option::of("[0-9]{1,18}"))
}

proptest! {
    /// Property: whole coins survive a trip through wei
    #[test]
    fn prop_units_round_trip(n in any::<u64>()) {
        prop_assert_eq!(to_units(&from_units(n)), Some(n));
    }

    /// Property: parsing is exact, value equals int * 10^18 + frac padded to 18 digits
    #[test]
    fn prop_parse_is_exact((int_part, frac_part) in arb_decimal()) {
        let text = match &frac_part {
            Some(frac) => format!("{int_part}.{frac}"),
            None => int_part.clone(),
        };
        let frac = frac_part.unwrap_or_default();
        let whole = BigInt::parse_bytes(int_part.as_bytes(), 10).unwrap();
        let scaled_frac = BigInt::parse_bytes(format!("{frac:0<18}").as_bytes(), 10).unwrap();
        let expected = whole * BigInt::from(10u8).pow(18) + scaled_frac;

        let amount = parse(&text).unwrap();
        prop_assert_eq!(amount.as_bigint(), &expected);
    }

    /// Property: canonical strings are pure digits, zero is only ever the sentinel,
    /// and a nonzero value is its trimmed integer part followed by 18 digits
    #[test]
    fn prop_canonical_shape((int_part, frac_part) in arb_decimal()) {
        let text = match &frac_part {
            Some(frac) => format!("{int_part}.{frac}"),
            None => int_part.clone(),
        };
        let canonical = normalize(&text).unwrap();
        prop_assert!(canonical.bytes().all(|b| b.is_ascii_digit()));
        let all_zero = canonical.bytes().all(|b| b == b'0');
        prop_assert!(!all_zero || canonical == "0");

        if canonical != "0" {
            let trimmed_int = int_part.trim_start_matches('0');
            prop_assert_eq!(canonical.len(), trimmed_int.len() + 18);
            prop_assert!(canonical.starts_with(trimmed_int));
        }
    }

    /// Property: more than 18 fractional digits always fails, never rounds
    #[test]
    fn prop_excess_precision_rejected(int_part in "[0-9]{1,10}", frac in "[0-9]{19,40}") {
        let text = format!("{int_part}.{frac}");
        let expected = WadError::precision_exceeded(text.clone(), frac.len());
        prop_assert_eq!(normalize(&text), Err(expected));
    }

    /// Property: any character outside digits and '.' makes the input malformed
    #[test]
    fn prop_foreign_characters_rejected(
        prefix in "[0-9]{0,5}",
        bad in "[^0-9.]",
        suffix in "[0-9]{0,5}",
    ) {
        let text = format!("{prefix}{bad}{suffix}");
        prop_assert_eq!(parse(&text), Err(WadError::malformed_number(text.clone())));
    }

    /// Property: exact formatting of coin-sized amounts reproduces the trimmed input
    #[test]
    fn prop_exact_format_round_trip(whole in 1u64.., frac in "[0-9]{0,17}[1-9]") {
        let text = format!("{whole}.{frac}");
        let amount = parse(&text).unwrap();
        prop_assert_eq!(format_with(&amount, &DisplayConfig::exact()), format!("{text} Coin"));
    }
}
