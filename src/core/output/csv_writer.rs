//! CSV table writers.
//!
//! Two table shapes are produced:
//!
//! - **Singular**: one header row of keys (after an empty corner cell) and
//!   one data row of values headed by a row label.
//!
//!   ```text
//!   ,Alice,Bob
//!   Weekend Plans,12,7
//!   ```
//!
//! - **Hourly**: the 24 hour labels as header, one row per participant.
//!
//!   ```text
//!   ,12am,1am,...,11pm
//!   Alice,0,0,...,3
//!   ```
//!
//! Both use a comma delimiter and the `csv` crate's minimal quoting.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::core::hours::{HOUR_LABELS, HOURS_PER_DAY};
use crate::error::{ChatstatsError, Result};

/// Key/value pairs of a singular table, in column order.
pub type Cells = Vec<(String, String)>;

/// Rows of an hourly table: participant name and 24 formatted cells.
pub type HourlyRows = Vec<(String, [String; HOURS_PER_DAY])>;

/// Formats a float the way the exports always have: integral values keep
/// one decimal (`2.0`), others use the shortest exact representation.
pub fn format_float(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

fn table_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new()
        .flexible(true)
        .from_writer(writer)
}

fn write_singular<W: Write>(wtr: &mut csv::Writer<W>, row_label: &str, cells: &Cells) -> Result<()> {
    wtr.write_record(std::iter::once("").chain(cells.iter().map(|(key, _)| key.as_str())))?;
    wtr.write_record(std::iter::once(row_label).chain(cells.iter().map(|(_, value)| value.as_str())))?;
    wtr.flush()?;
    Ok(())
}

fn write_hourly<W: Write>(wtr: &mut csv::Writer<W>, rows: &HourlyRows) -> Result<()> {
    wtr.write_record(std::iter::once("").chain(HOUR_LABELS))?;
    for (name, cells) in rows {
        wtr.write_record(std::iter::once(name.as_str()).chain(cells.iter().map(String::as_str)))?;
    }
    wtr.flush()?;
    Ok(())
}

fn into_string(wtr: csv::Writer<Vec<u8>>) -> Result<String> {
    let bytes = wtr
        .into_inner()
        .map_err(|e| ChatstatsError::Io(e.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}

/// Writes a singular table to `path`.
pub fn write_singular_csv(path: &Path, row_label: &str, cells: &Cells) -> Result<()> {
    let mut wtr = table_writer(File::create(path)?);
    write_singular(&mut wtr, row_label, cells)
}

/// Renders a singular table to a string.
///
/// # Example
///
/// ```rust
/// use chatstats::core::output::to_singular_csv;
///
/// let cells = vec![("Alice".to_string(), "2".to_string()), ("Bob".to_string(), "1".to_string())];
/// let csv = to_singular_csv("Chat", &cells)?;
/// assert_eq!(csv, ",Alice,Bob\nChat,2,1\n");
/// # Ok::<(), chatstats::ChatstatsError>(())
/// ```
pub fn to_singular_csv(row_label: &str, cells: &Cells) -> Result<String> {
    let mut wtr = table_writer(Vec::new());
    write_singular(&mut wtr, row_label, cells)?;
    into_string(wtr)
}

/// Writes an hourly table to `path`.
pub fn write_hourly_csv(path: &Path, rows: &HourlyRows) -> Result<()> {
    let mut wtr = table_writer(File::create(path)?);
    write_hourly(&mut wtr, rows)
}

/// Renders an hourly table to a string.
pub fn to_hourly_csv(rows: &HourlyRows) -> Result<String> {
    let mut wtr = table_writer(Vec::new());
    write_hourly(&mut wtr, rows)?;
    into_string(wtr)
}
