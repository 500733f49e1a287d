// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! A small car value object.
//!
//! [`Car`] holds a make, year and color, always has four wheels, and renders
//! a "full name" such as `2007 Volvo (Unknown)`. Cars are built from a
//! [`CarConfig`], which can also be loaded from a TOML or JSON file.

mod car;
mod config;

pub use car::{Car, COLORS, DEFAULT_COLOR, DEFAULT_MAKE, DEFAULT_YEAR, WHEELS};
pub use config::{CarConfig, ConfigError};
