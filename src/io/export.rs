//! CSV export and re-import of the usage table.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::Path;

use serde::Deserialize;

use crate::model::types::{UsageResult, round2};

/// Column header of the usage export.
const HEADER: [&str; 5] = [
    "Appliance",
    "Quantity",
    "Hours_per_day",
    "Power (Watts)",
    "Monthly_kWh",
];

/// One row of a previously exported usage table.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct UsageRow {
    #[serde(rename = "Appliance")]
    pub appliance: String,
    #[serde(rename = "Quantity")]
    pub quantity: u32,
    #[serde(rename = "Hours_per_day")]
    pub hours_per_day: f64,
    #[serde(rename = "Power (Watts)")]
    pub power_watts: f64,
    #[serde(rename = "Monthly_kWh")]
    pub monthly_kwh: f64,
}

/// Exports the usage table to a CSV file at the given path.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(results: &[UsageResult], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(results, buf)?;
    tracing::info!(path = %path.display(), rows = results.len(), "usage table exported");
    Ok(())
}

/// Writes the usage table as CSV to any writer.
///
/// One row per entry; kWh is rounded to two decimals, other values are
/// written as entered.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(results: &[UsageResult], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER)?;

    for r in results {
        wtr.write_record(&[
            r.appliance_name.clone(),
            r.quantity.to_string(),
            r.hours_per_day.to_string(),
            r.rated_power_watts.to_string(),
            format!("{:.2}", round2(r.monthly_kwh)),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Reads a usage table previously written by [`write_csv`].
///
/// # Errors
///
/// Returns a `csv::Error` if a row is malformed or a column is missing.
pub fn read_usage_csv(reader: impl Read) -> Result<Vec<UsageRow>, csv::Error> {
    csv::ReaderBuilder::new()
        .from_reader(reader)
        .into_deserialize()
        .collect()
}

/// Sums the exported monthly kWh column.
pub fn total_from_rows(rows: &[UsageRow]) -> f64 {
    rows.iter().map(|r| r.monthly_kwh).sum()
}
