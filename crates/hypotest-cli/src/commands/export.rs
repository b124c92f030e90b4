//! Export commands: summary table and plain-text summary

use crate::error::Result;
use crate::output;
use hypotest::config::Settings;
use hypotest::data::LoadOptions;
use hypotest::report::{SAVED_CSV_MESSAGE, SAVED_TEXT_MESSAGE};
use hypotest::session::Session;
use std::path::Path;

/// Export format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Format {
    Csv,
    Text,
}

/// Run an export command
pub(crate) fn run(
    input: &Path,
    output_path: &Path,
    options: &LoadOptions,
    format: Format,
) -> Result<()> {
    let mut session = Session::new(&Settings::default(), *options);
    session.import(Some(input))?;
    match format {
        Format::Csv => {
            session.save_csv(Some(output_path))?;
            output::success(SAVED_CSV_MESSAGE);
        }
        Format::Text => {
            session.save_text(Some(output_path))?;
            output::success(SAVED_TEXT_MESSAGE);
        }
    }
    Ok(())
}
