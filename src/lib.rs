// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Exact conversion between decimal coin strings and 18-decimal fixed-point wei.
//!
//! - **Parsing** is exact: `"1.2"` becomes `1200000000000000000` wei, and any
//!   input that would lose precision is rejected rather than rounded.
//! - **Formatting** is lossy by design: an amount is shown in the largest of
//!   Coin, GWei or Wei that fits, with a truncated fraction.
//!
//! ```rust
//! use wadscale::{format, parse_positive};
//!
//! let amount = parse_positive("0.000000001").unwrap();
//! assert_eq!(amount.as_bigint().to_string(), "1000000000");
//! assert_eq!(format(&amount), "1 GWei");
//! ```
//!
//! Several fields can be validated together with [`BatchValidator`], which
//! reports every failure instead of stopping at the first.

pub mod bootstrap;
pub mod config;
pub mod errors;
mod tracing;
pub mod types;
pub mod wad;

pub use config::{DisplayConfig, DisplayConfigBuilder};
pub use errors::{FieldError, ValidationError, WadError, WadscaleError};
pub use types::amount::FixedPointAmount;
pub use types::unit::DisplayUnit;
pub use wad::{
    format, format_with, from_float_units, from_units, normalize, parse, parse_non_negative,
    parse_positive, parse_with_policy, to_units, BatchValidator, SignPolicy,
};
