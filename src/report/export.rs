//! Summary exports: a 3 x 2 table and a plain-text template.
//!
//! Values are written at full precision. In the table a NaN is an empty
//! field; in the text template it is `nan`.

use super::{format_full, GROUP_NAMES, MEAN_LABEL, MEDIAN_LABEL, STD_DEV_LABEL};
use crate::error::{HypotestError, Result};
use crate::stats::DescriptiveStats;
use std::fs;
use std::io::{Read, Write};
use std::path::Path;
use tracing::info;

/// Header row of the tabular export.
pub const TABLE_HEADER: [&str; 3] = ["Статистические данные", "Группа 1", "Группа 2"];

const ROW_LABELS: [&str; 3] = [MEAN_LABEL, STD_DEV_LABEL, MEDIAN_LABEL];

fn row_values(stats: &DescriptiveStats) -> [f64; 3] {
    [stats.mean, stats.std_dev, stats.median]
}

fn table_cell(value: f64) -> String {
    if value.is_nan() {
        String::new()
    } else {
        format_full(value)
    }
}

/// Writes the summary table.
///
/// # Errors
///
/// Returns an error if the underlying writer fails.
///
/// # Examples
///
/// ```
/// use hypotest::report::write_summary_csv;
/// use hypotest::stats::DescriptiveStats;
///
/// let s = DescriptiveStats::from_slice(&[1.0, 2.0, 3.0]).expect("valid");
/// let mut out = Vec::new();
/// write_summary_csv(&mut out, &[s, s], b',').expect("in-memory write");
///
/// let text = String::from_utf8(out).expect("utf-8");
/// assert!(text.starts_with("Статистические данные,Группа 1,Группа 2\n"));
/// assert!(text.contains("Медиана,2.0,2.0\n"));
/// ```
pub fn write_summary_csv<W: Write>(
    writer: W,
    stats: &[DescriptiveStats; 2],
    delimiter: u8,
) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(delimiter)
        .from_writer(writer);

    writer.write_record(TABLE_HEADER)?;
    let first = row_values(&stats[0]);
    let second = row_values(&stats[1]);
    for (i, label) in ROW_LABELS.iter().enumerate() {
        writer.write_record([
            (*label).to_string(),
            table_cell(first[i]),
            table_cell(second[i]),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the plain-text summary.
///
/// # Errors
///
/// Returns an error if the underlying writer fails.
pub fn write_summary_text<W: Write>(mut writer: W, stats: &[DescriptiveStats; 2]) -> Result<()> {
    for (i, (s, name)) in stats.iter().zip(GROUP_NAMES).enumerate() {
        if i > 0 {
            writeln!(writer)?;
        }
        writeln!(writer, "{name}:")?;
        writeln!(writer, "{MEAN_LABEL}: {}", format_full(s.mean))?;
        writeln!(writer, "{STD_DEV_LABEL}: {}", format_full(s.std_dev))?;
        writeln!(writer, "{MEDIAN_LABEL}: {}", format_full(s.median))?;
    }
    Ok(())
}

/// Renders the table in memory, then writes it to `path`.
///
/// # Errors
///
/// Returns [`HypotestError::OperationFailed`] if the file cannot be written.
pub fn save_summary_csv(path: &Path, stats: &[DescriptiveStats; 2], delimiter: u8) -> Result<()> {
    let mut buf = Vec::new();
    write_summary_csv(&mut buf, stats, delimiter)?;
    persist(path, &buf)
}

/// Renders the text summary in memory, then writes it to `path` as UTF-8.
///
/// # Errors
///
/// Returns [`HypotestError::OperationFailed`] if the file cannot be written.
pub fn save_summary_text(path: &Path, stats: &[DescriptiveStats; 2]) -> Result<()> {
    let mut buf = Vec::new();
    write_summary_text(&mut buf, stats)?;
    persist(path, &buf)
}

fn persist(path: &Path, contents: &[u8]) -> Result<()> {
    fs::write(path, contents).map_err(|e| {
        HypotestError::operation_failed(format!("cannot write {}: {e}", path.display()))
    })?;
    info!(path = %path.display(), bytes = contents.len(), "summary written");
    Ok(())
}

/// Parses a table produced by [`write_summary_csv`] back into statistics.
///
/// # Errors
///
/// Returns [`HypotestError::UnparsableFile`] if the header, row labels or
/// values do not match the export layout.
pub fn read_summary_csv<R: Read>(reader: R, delimiter: u8) -> Result<[DescriptiveStats; 2]> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    if headers.iter().ne(TABLE_HEADER) {
        return Err(HypotestError::UnparsableFile {
            line: 1,
            message: format!("unexpected summary header {headers:?}"),
        });
    }

    let mut values = [[f64::NAN; 3]; 2];
    let mut seen = 0;
    for (row, result) in reader.records().enumerate() {
        let record = result?;
        let line = record.position().map_or(0, csv::Position::line);
        if row >= ROW_LABELS.len() || record.len() != 3 || &record[0] != ROW_LABELS[row] {
            return Err(HypotestError::UnparsableFile {
                line,
                message: format!("unexpected summary row {record:?}"),
            });
        }
        for group in 0..2 {
            values[group][row] = parse_table_cell(&record[group + 1], line)?;
        }
        seen += 1;
    }
    if seen != ROW_LABELS.len() {
        return Err(HypotestError::UnparsableFile {
            line: 0,
            message: format!("expected {} summary rows, found {seen}", ROW_LABELS.len()),
        });
    }

    Ok(values.map(|[mean, std_dev, median]| DescriptiveStats {
        mean,
        std_dev,
        median,
    }))
}

fn parse_table_cell(field: &str, line: u64) -> Result<f64> {
    if field.is_empty() {
        return Ok(f64::NAN);
    }
    field.parse().map_err(|_| HypotestError::UnparsableFile {
        line,
        message: format!("expected a number, got {field:?}"),
    })
}
