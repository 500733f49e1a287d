// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `car` binary entry point.

use std::io::Write;

use clap::Parser;

use car_cli::cli::Cli;
use car_cli::report::report_error;
use car_cli::run::{init_logging, run};

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut stdout = std::io::stdout().lock();
    if let Err(e) = run(&cli, &mut stdout).and_then(|()| Ok(stdout.flush()?)) {
        report_error(&e);
        std::process::exit(1);
    }
}
