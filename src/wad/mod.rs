// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Conversion engine between decimal coin text and exact wei amounts.
//!
//! Dependency order, leaves first:
//! - [`trim`]: zero-trimming primitives
//! - [`normalize`]: decimal text to canonical coin string
//! - [`sign`]: sign policy checks on canonical strings
//! - [`parse`](mod@parse): canonical strings to amounts, plus the unit constructors
//! - [`format`](mod@format): amounts to unit-scaled display strings
//! - [`batch`]: folding many conversions into one validation report
//!
//! Every function here is pure and re-entrant.

pub mod batch;
pub mod format;
pub mod normalize;
pub mod parse;
pub mod sign;
pub mod trim;

pub use batch::BatchValidator;
pub use format::{format, format_with, ZERO_DISPLAY};
pub use normalize::normalize;
pub use parse::{
    from_float_units, from_units, parse, parse_non_negative, parse_positive, parse_with_policy,
    to_units,
};
pub use sign::SignPolicy;
pub use trim::{trim_leading_zeros, trim_trailing_zeros};
