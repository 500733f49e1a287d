// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Command execution.

use std::io::{IsTerminal, Write};

use anyhow::Context;
use car::{Car, CarConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Command};
use crate::output::{write_car, write_colors};

/// Install the stderr log subscriber.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `debug` with `--verbose`.
pub fn init_logging(verbose: bool) {
    let fallback = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .try_init();
}

/// Resolve the car options: config file first, then flags on top
pub fn resolve_config(cli: &Cli) -> anyhow::Result<CarConfig> {
    let base = match &cli.config {
        Some(path) => CarConfig::load(path)
            .with_context(|| format!("Failed to load {}", path.display()))?,
        None => CarConfig::default(),
    };
    Ok(base.merge(cli.flag_config()))
}

/// Run the selected command, writing its output to `writer`
pub fn run<W: Write>(cli: &Cli, writer: &mut W) -> anyhow::Result<()> {
    let command = cli.command();
    tracing::debug!(?command, format = ?cli.format, "running");
    match command {
        Command::Show => {
            let car = Car::from(resolve_config(cli)?);
            write_car(writer, &car, cli.format)?;
        }
        Command::Colors => write_colors(writer, cli.format)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;
