// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Car construction options and TOML/JSON config loading.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading a car config
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read car config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options for building a [`Car`](crate::Car).
///
/// Any field left as `None` falls back to the car's default.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CarConfig {
    /// Manufacturer (default: "Volvo")
    #[serde(default)]
    pub make: Option<String>,

    /// Model year (default: 2007)
    #[serde(default)]
    pub year: Option<i32>,

    /// Paint color (default: "Unknown")
    #[serde(default)]
    pub color: Option<String>,
}

impl CarConfig {
    pub fn make(mut self, make: impl Into<String>) -> Self {
        self.make = Some(make.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Overlay the fields set in `other` on top of `self`
    pub fn merge(self, other: CarConfig) -> Self {
        Self {
            make: other.make.or(self.make),
            year: other.year.or(self.year),
            color: other.color.or(self.color),
        }
    }

    /// Load a config from a TOML or JSON file.
    ///
    /// Files ending in `.json` are parsed as JSON, everything else as TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading car config");
        let content = std::fs::read_to_string(path)?;
        if path.extension().is_some_and(|e| e == "json") {
            Self::from_json_str(&content)
        } else {
            Self::from_toml_str(&content)
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(content)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
