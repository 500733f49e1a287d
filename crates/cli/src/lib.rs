// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line front end for the `car` crate.
//!
//! Builds a car from a config file and/or flags and prints its full name,
//! its attributes as JSON, or the color catalog.

pub mod cli;
pub mod output;
pub mod report;
pub mod run;
