// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing.

use std::path::PathBuf;

use car::CarConfig;
use clap::{Parser, Subcommand, ValueEnum};

/// Build a car and describe it
#[derive(Parser, Debug, Clone)]
#[command(name = "car", version, about = "Build a car and describe it")]
pub struct Cli {
    /// Car config file (TOML, or JSON when the extension is .json)
    #[arg(long, env = "CAR_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    /// Manufacturer, overrides the config file
    #[arg(long, global = true)]
    pub make: Option<String>,

    /// Model year, overrides the config file
    #[arg(long, global = true, allow_negative_numbers = true)]
    pub year: Option<i32>,

    /// Paint color, overrides the config file
    #[arg(long, global = true)]
    pub color: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Log at debug level (RUST_LOG takes precedence when set)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the car's full name (default)
    Show,
    /// List the recognized color names
    Colors,
}

#[derive(Clone, Copy, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    /// Command to run, defaulting to `show`
    pub fn command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Show)
    }

    /// Car options given as flags
    pub fn flag_config(&self) -> CarConfig {
        CarConfig {
            make: self.make.clone(),
            year: self.year,
            color: self.color.clone(),
        }
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
