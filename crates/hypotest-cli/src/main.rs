//! hypotest - Ansari-Bradley dispersion comparison CLI
//!
//! Usage:
//!   hypotest import data.csv                    # Descriptive statistics
//!   hypotest test data.csv --alpha 0.05         # Test, decision and histogram
//!   hypotest test data.csv --plot-svg plot.svg  # Also write an SVG histogram
//!   hypotest save-csv data.csv -o summary.csv   # Export the summary table
//!   hypotest save-text data.csv -o summary.txt  # Export the text summary
//!   hypotest session                            # Interactive actions on stdin

use clap::Parser;
use hypotest_cli::{execute_command, init_logging, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    match execute_command(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            e.exit_code()
        }
    }
}
