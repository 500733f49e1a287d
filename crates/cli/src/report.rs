// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error reports on stderr.
//!
//! The outermost error leads with `Error:`, each underlying cause follows on
//! its own `caused by:` line. Only the headline is colored, and only on a
//! terminal.

use std::io::{self, IsTerminal, Write};

/// Report a failed run to stderr.
pub fn report_error(err: &anyhow::Error) {
    let stderr = io::stderr();
    let is_tty = stderr.is_terminal();
    write_report(&mut stderr.lock(), err, is_tty);
}

fn write_report<W: Write>(writer: &mut W, err: &anyhow::Error, is_terminal: bool) {
    if is_terminal {
        let _ = writeln!(writer, "\x1b[31mError: {}\x1b[0m", err);
    } else {
        let _ = writeln!(writer, "Error: {}", err);
    }
    for cause in err.chain().skip(1) {
        let _ = writeln!(writer, "  caused by: {}", cause);
    }
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod tests;
