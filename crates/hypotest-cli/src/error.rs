//! Error types for hypotest-cli

use hypotest::decision::Decision;
use hypotest::report::user_message;
use hypotest::HypotestError;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

/// CLI error types
#[derive(Error, Debug)]
pub enum CliError {
    /// Library error, shown with its user-facing message
    #[error("{}", user_message(.0))]
    Hypotest(#[from] HypotestError),

    /// The test ran but the alpha text was blank or invalid
    #[error("{}", .0.label())]
    Alpha(Decision),

    /// Terminal I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// SVG plot could not be drawn
    #[error("Failed to draw plot: {0}")]
    Plot(String),
}

impl CliError {
    /// Get exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.code())
    }

    fn code(&self) -> u8 {
        match self {
            Self::Hypotest(err) => match err {
                HypotestError::FileNotSelected => 2,
                HypotestError::EmptyFile => 3,
                HypotestError::UnparsableFile { .. } => 4,
                HypotestError::InvalidInput(_) => 5,
                HypotestError::NoData => 6,
                HypotestError::NoSignificanceLevelSet | HypotestError::InvalidAlpha(_) => 7,
                HypotestError::OperationFailed(_)
                | HypotestError::Io(_)
                | HypotestError::Config(_) => 1,
            },
            Self::Alpha(_) => 7,
            Self::Io(_) | Self::Plot(_) => 1,
        }
    }
}
