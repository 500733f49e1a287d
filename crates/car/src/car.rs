// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The car entity.

use crate::config::CarConfig;
use std::fmt;

/// Make used when none is configured
pub const DEFAULT_MAKE: &str = "Volvo";
/// Year used when none is configured
pub const DEFAULT_YEAR: i32 = 2007;
/// Color used when none is configured
pub const DEFAULT_COLOR: &str = "Unknown";
/// Every car has exactly this many wheels
pub const WHEELS: u32 = 4;

/// Recognized color names
pub const COLORS: [&str; 4] = ["blue", "black", "red", "green"];

/// A car with a make, year and color.
///
/// Fields are freely mutable and never validated; a year of `9999` or a color
/// outside [`COLORS`] is accepted as-is. The wheel count is fixed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Car {
    make: String,
    year: i32,
    color: String,
}

impl Car {
    /// Create a car with all default values
    pub fn new() -> Self {
        Self::with_config(CarConfig::default())
    }

    /// Create a car, taking each field from `config` when set
    pub fn with_config(config: CarConfig) -> Self {
        let car = Self {
            make: config.make.unwrap_or_else(|| DEFAULT_MAKE.to_string()),
            year: config.year.unwrap_or(DEFAULT_YEAR),
            color: config.color.unwrap_or_else(|| DEFAULT_COLOR.to_string()),
        };
        tracing::debug!(make = %car.make, year = car.year, color = %car.color, "built car");
        car
    }

    /// The recognized color names. Order carries no meaning.
    pub fn colors() -> &'static [&'static str] {
        &COLORS
    }

    pub fn make(&self) -> &str {
        &self.make
    }

    pub fn set_make(&mut self, make: impl Into<String>) {
        self.make = make.into();
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn set_year(&mut self, year: i32) {
        self.year = year;
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn set_color(&mut self, color: impl Into<String>) {
        self.color = color.into();
    }

    /// Always [`WHEELS`]
    pub fn wheels(&self) -> u32 {
        WHEELS
    }

    /// Display name in the form `<year> <make> (<color>)`
    pub fn full_name(&self) -> String {
        self.to_string()
    }

    /// Whether the current color is one of [`COLORS`]
    pub fn is_catalog_color(&self) -> bool {
        COLORS.contains(&self.color.as_str())
    }
}

impl Default for Car {
    fn default() -> Self {
        Self::new()
    }
}

impl From<CarConfig> for Car {
    fn from(config: CarConfig) -> Self {
        Self::with_config(config)
    }
}

impl fmt::Display for Car {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} ({})", self.year, self.make, self.color)
    }
}

#[cfg(test)]
#[path = "car_tests.rs"]
mod tests;
