//! Error types for hypotest operations.
//!
//! Every user action (import, run test, save) returns one of these kinds;
//! the presentation layer turns them into messages.

use std::fmt;

/// Main error type for hypotest operations.
///
/// # Examples
///
/// ```
/// use hypotest::error::HypotestError;
///
/// let err = HypotestError::UnparsableFile {
///     line: 3,
///     message: "expected a number, got \"abc\"".to_string(),
/// };
/// assert!(err.to_string().contains("line 3"));
/// ```
#[derive(Debug)]
pub enum HypotestError {
    /// No input or output file was chosen.
    FileNotSelected,

    /// The input file has no content or no data rows.
    EmptyFile,

    /// The input file could not be parsed as delimited numeric data.
    UnparsableFile {
        /// 1-based line of the offending record (0 when unknown)
        line: u64,
        /// Parser message
        message: String,
    },

    /// A sample is empty or holds non-numeric values at test time.
    InvalidInput(String),

    /// The significance level was left blank.
    NoSignificanceLevelSet,

    /// The significance level is not a real number in (0, 1).
    InvalidAlpha(String),

    /// An action that needs loaded data was triggered before any load.
    NoData,

    /// Any other runtime fault during test execution or export.
    OperationFailed(String),

    /// I/O error (file not found, permission denied, etc.).
    Io(std::io::Error),

    /// Invalid configuration file.
    Config(String),
}

impl fmt::Display for HypotestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HypotestError::FileNotSelected => write!(f, "No file selected"),
            HypotestError::EmptyFile => write!(f, "The selected file is empty"),
            HypotestError::UnparsableFile { line, message } => {
                if *line == 0 {
                    write!(f, "Could not parse the selected file: {message}")
                } else {
                    write!(
                        f,
                        "Could not parse the selected file at line {line}: {message}"
                    )
                }
            }
            HypotestError::InvalidInput(msg) => write!(f, "Invalid input: {msg}"),
            HypotestError::NoSignificanceLevelSet => {
                write!(f, "Significance level is not set")
            }
            HypotestError::InvalidAlpha(value) => write!(
                f,
                "Invalid significance level: {value:?}, expected a number in (0, 1)"
            ),
            HypotestError::NoData => write!(f, "No data loaded"),
            HypotestError::OperationFailed(msg) => write!(f, "Operation failed: {msg}"),
            HypotestError::Io(e) => write!(f, "I/O error: {e}"),
            HypotestError::Config(msg) => write!(f, "Configuration error: {msg}"),
        }
    }
}

impl std::error::Error for HypotestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            HypotestError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for HypotestError {
    fn from(err: std::io::Error) -> Self {
        HypotestError::Io(err)
    }
}

impl From<csv::Error> for HypotestError {
    fn from(err: csv::Error) -> Self {
        let line = err.position().map_or(0, csv::Position::line);
        let message = err.to_string();
        match err.into_kind() {
            csv::ErrorKind::Io(e) => HypotestError::Io(e),
            _ => HypotestError::UnparsableFile { line, message },
        }
    }
}

impl HypotestError {
    /// Create an invalid input error for an empty sample
    #[must_use]
    pub fn empty_sample(context: &str) -> Self {
        Self::InvalidInput(format!("empty sample: {context}"))
    }

    /// Wrap any displayable fault as `OperationFailed`
    #[must_use]
    pub fn operation_failed(err: impl fmt::Display) -> Self {
        Self::OperationFailed(err.to_string())
    }
}

/// Convenience type alias for Results.
pub type Result<T> = std::result::Result<T, HypotestError>;
