//! CSV loading for two-column sample files.
//!
//! Column 1 becomes group 1 and column 2 becomes group 2. Extra columns are
//! ignored, blank cells are missing values, and the first row may be a header.

use super::{Sample, TwoSampleData};
use crate::error::{HypotestError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::{debug, info};

/// Tokens read as a missing value rather than a parse failure.
const MISSING_TOKENS: [&str; 5] = ["na", "nan", "n/a", "null", "none"];

/// How the first row of the file is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderMode {
    /// Header if either of the first two fields is not numeric
    #[default]
    Auto,
    /// First row is always a header
    Present,
    /// First row is always data
    Absent,
}

/// Options controlling how an input file is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadOptions {
    /// Field delimiter
    pub delimiter: u8,
    /// Header handling
    pub header: HeaderMode,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            header: HeaderMode::Auto,
        }
    }
}

/// Loads two samples from a delimited file.
///
/// # Errors
///
/// - [`HypotestError::EmptyFile`] for a zero-byte file or one without data rows
/// - [`HypotestError::UnparsableFile`] for malformed records, fewer than two
///   columns, or non-numeric cells
/// - [`HypotestError::InvalidInput`] when a column has no values at all
/// - [`HypotestError::Io`] when the file cannot be opened
pub fn load_csv(path: impl AsRef<Path>, options: &LoadOptions) -> Result<TwoSampleData> {
    let path = path.as_ref();
    debug!(path = %path.display(), "opening input file");

    let file = File::open(path)?;
    if file.metadata()?.len() == 0 {
        return Err(HypotestError::EmptyFile);
    }

    let data = parse_csv(BufReader::new(file), options)?;
    info!(
        path = %path.display(),
        group1 = data.group1.len(),
        group2 = data.group2.len(),
        "loaded samples"
    );
    Ok(data)
}

/// Parses two samples from any reader of delimited text.
///
/// # Errors
///
/// Same as [`load_csv`], minus the file-open failures.
///
/// # Examples
///
/// ```
/// use hypotest::data::{parse_csv, LoadOptions};
///
/// let text = "a,b\n1,2\n3,4\n5,\n";
/// let data = parse_csv(text.as_bytes(), &LoadOptions::default()).expect("valid csv");
/// assert_eq!(data.group1.as_slice(), &[1.0, 3.0, 5.0]);
/// assert_eq!(data.group2.as_slice(), &[2.0, 4.0]);
/// ```
pub fn parse_csv<R: Read>(reader: R, options: &LoadOptions) -> Result<TwoSampleData> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(options.delimiter)
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut group1 = Vec::new();
    let mut group2 = Vec::new();
    let mut labels = None;
    let mut first = true;
    let mut rows = 0usize;

    for result in reader.records() {
        let record = result?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        let line = record.position().map_or(0, csv::Position::line);

        if first {
            first = false;
            if record.len() < 2 {
                return Err(HypotestError::UnparsableFile {
                    line,
                    message: format!("expected at least two columns, found {}", record.len()),
                });
            }
            if is_header(&record, options.header) {
                debug!(line, "treating first row as header");
                labels = Some([record[0].to_string(), record[1].to_string()]);
                continue;
            }
        }

        rows += 1;
        if let Some(v) = parse_cell(record.get(0), line, 1)? {
            group1.push(v);
        }
        if let Some(v) = parse_cell(record.get(1), line, 2)? {
            group2.push(v);
        }
    }

    if rows == 0 {
        return Err(HypotestError::EmptyFile);
    }

    let group1 = column_sample(group1, 1)?;
    let group2 = column_sample(group2, 2)?;
    Ok(TwoSampleData {
        group1,
        group2,
        labels,
    })
}

fn is_header(record: &csv::StringRecord, mode: HeaderMode) -> bool {
    match mode {
        HeaderMode::Present => true,
        HeaderMode::Absent => false,
        HeaderMode::Auto => record
            .iter()
            .take(2)
            .any(|field| !field.is_empty() && !is_missing(field) && field.parse::<f64>().is_err()),
    }
}

fn is_missing(field: &str) -> bool {
    MISSING_TOKENS
        .iter()
        .any(|token| field.eq_ignore_ascii_case(token))
}

fn parse_cell(field: Option<&str>, line: u64, column: usize) -> Result<Option<f64>> {
    let Some(field) = field.filter(|f| !f.is_empty() && !is_missing(f)) else {
        return Ok(None);
    };
    match field.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(Some(v)),
        _ => Err(HypotestError::UnparsableFile {
            line,
            message: format!("column {column}: expected a number, got {field:?}"),
        }),
    }
}

fn column_sample(values: Vec<f64>, column: usize) -> Result<Sample> {
    if values.is_empty() {
        return Err(HypotestError::InvalidInput(format!(
            "column {column} has no numeric values"
        )));
    }
    Sample::new(values)
}
