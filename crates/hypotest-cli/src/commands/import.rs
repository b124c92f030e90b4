//! Import command implementation

use crate::error::Result;
use crate::output;
use hypotest::analysis::Analysis;
use hypotest::data::LoadOptions;
use hypotest::report::{json_report, statistics_text, STATISTICS_TITLE};
use std::path::Path;

/// Run the import command
pub(crate) fn run(path: &Path, options: &LoadOptions, json: bool) -> Result<()> {
    let analysis = Analysis::load(path, options)?;

    if json {
        println!("{}", json_report(&analysis, None)?);
        return Ok(());
    }

    output::kv("File", path.display());
    if let Some([first, second]) = analysis.labels() {
        output::kv("Columns", format!("{first}, {second}"));
    }
    output::kv(
        "Observations",
        format!("{} / {}", analysis.group1().len(), analysis.group2().len()),
    );
    output::dialog(STATISTICS_TITLE, &statistics_text(analysis.describe()));
    Ok(())
}
