// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across wadscale.
//!
//! This module provides:
//! - Exact wei amounts ([`amount::FixedPointAmount`])
//! - Display units for formatting ([`unit::DisplayUnit`])

pub mod amount;
pub mod unit;

// Note: Public types are re-exported from lib.rs, not here
