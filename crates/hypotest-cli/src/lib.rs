//! hypotest-cli library
//!
//! This library is the foundation for the hypotest CLI binary.
//! Exports CLI structures for testing and reuse.

use clap::{Parser, Subcommand};
use hypotest::config::Settings;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
pub mod error;
mod output;
mod plot;

pub use error::CliError;

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "HYPOTEST_LOG";

/// hypotest - Ansari-Bradley dispersion comparison
///
/// Load two columns of numbers, describe both groups, and test whether they
/// share the same scale.
#[derive(Parser, Debug)]
#[command(name = "hypotest")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Settings file (TOML)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Load a two-column CSV file and show descriptive statistics
    Import {
        /// Input CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Run the Ansari-Bradley test and show the decision
    Test {
        /// Input CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Significance level (overrides the settings file)
        #[arg(short, long, allow_hyphen_values = true)]
        alpha: Option<String>,

        /// Histogram bins per group
        #[arg(long)]
        bins: Option<usize>,

        /// Do not print the histogram
        #[arg(long)]
        no_plot: bool,

        /// Also write the histogram to an SVG file
        #[arg(long, value_name = "PATH")]
        plot_svg: Option<PathBuf>,
    },

    /// Save the summary table as CSV
    SaveCsv {
        /// Input CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output file
        #[arg(short, long, value_name = "OUT")]
        output: PathBuf,
    },

    /// Save the summary as plain text
    SaveText {
        /// Input CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output file
        #[arg(short, long, value_name = "OUT")]
        output: PathBuf,
    },

    /// Interactive session reading actions from stdin
    Session,
}

/// Initialise logging on stderr.
///
/// `HYPOTEST_LOG` wins over the verbosity flags.
pub fn init_logging(verbose: bool, quiet: bool) {
    let default = if verbose {
        "debug"
    } else if quiet {
        "error"
    } else {
        "warn"
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));
    // a second init (tests) keeps the first subscriber
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn load_settings(cli: &Cli) -> Result<Settings, CliError> {
    match &cli.config {
        Some(path) => Ok(Settings::load(path)?),
        None => Ok(Settings::default()),
    }
}

/// Execute the CLI command and return the result.
pub fn execute_command(cli: &Cli) -> Result<(), CliError> {
    let settings = load_settings(cli)?;
    let options = settings.load_options()?;

    match &cli.command {
        Commands::Import { file } => commands::import::run(file, &options, cli.json),
        Commands::Test {
            file,
            alpha,
            bins,
            no_plot,
            plot_svg,
        } => commands::test::run(
            file,
            &options,
            &commands::test::TestArgs {
                alpha: alpha.as_deref().unwrap_or(&settings.alpha),
                bins: bins.unwrap_or(settings.histogram_bins),
                plot: !no_plot && !cli.json,
                plot_svg: plot_svg.as_deref(),
                json: cli.json,
            },
        ),
        Commands::SaveCsv { file, output } => {
            commands::export::run(file, output, &options, commands::export::Format::Csv)
        }
        Commands::SaveText { file, output } => {
            commands::export::run(file, output, &options, commands::export::Format::Text)
        }
        Commands::Session => commands::session::run(&settings, options),
    }
}
