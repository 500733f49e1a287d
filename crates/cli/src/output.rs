// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text and JSON rendering of cars and the color catalog.

use std::io::Write;

use car::Car;
use serde::Serialize;

use crate::cli::OutputFormat;

/// JSON view of a car
#[derive(Debug, Serialize)]
pub struct CarReport<'a> {
    pub make: &'a str,
    pub year: i32,
    pub color: &'a str,
    pub wheels: u32,
    pub full_name: String,
}

impl<'a> From<&'a Car> for CarReport<'a> {
    fn from(car: &'a Car) -> Self {
        Self {
            make: car.make(),
            year: car.year(),
            color: car.color(),
            wheels: car.wheels(),
            full_name: car.full_name(),
        }
    }
}

/// Write a car: its full name as text, or a [`CarReport`] as JSON
pub fn write_car<W: Write>(writer: &mut W, car: &Car, format: OutputFormat) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => writeln!(writer, "{}", car.full_name()),
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, &CarReport::from(car))?;
            writeln!(writer)
        }
    }
}

/// Write the color catalog: one name per line as text, or a JSON array
pub fn write_colors<W: Write>(writer: &mut W, format: OutputFormat) -> std::io::Result<()> {
    match format {
        OutputFormat::Text => {
            for color in Car::colors() {
                writeln!(writer, "{}", color)?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            serde_json::to_writer(&mut *writer, Car::colors())?;
            writeln!(writer)
        }
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
