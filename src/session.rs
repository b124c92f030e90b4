//! Interactive session state: the current analysis and the alpha text.
//!
//! Each method corresponds to one user action. A failed action leaves the
//! session exactly as it was.

use crate::analysis::{Analysis, Evaluation};
use crate::config::Settings;
use crate::data::LoadOptions;
use crate::error::{HypotestError, Result};
use crate::report::{save_summary_csv, save_summary_text};
use crate::stats::DescriptiveStats;
use std::path::Path;
use tracing::{info, warn};

/// Mutable state behind the user actions.
///
/// # Examples
///
/// ```no_run
/// use hypotest::session::Session;
/// use std::path::Path;
///
/// let mut session = Session::default();
/// session.import(Some(Path::new("samples.csv")))?;
/// session.set_alpha("0.01");
/// let evaluation = session.run_test()?;
/// println!("{}", evaluation.decision);
/// # Ok::<(), hypotest::HypotestError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    analysis: Option<Analysis>,
    alpha: String,
    options: LoadOptions,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(&Settings::default(), LoadOptions::default())
    }
}

impl Session {
    /// Starts a session with the configured alpha and loader options.
    #[must_use]
    pub fn new(settings: &Settings, options: LoadOptions) -> Self {
        Self {
            analysis: None,
            alpha: settings.alpha.clone(),
            options,
        }
    }

    /// Loads a file and makes it the current analysis.
    ///
    /// # Errors
    ///
    /// - [`HypotestError::FileNotSelected`] when `path` is `None`
    /// - any loader error; the previous analysis stays current
    pub fn import(&mut self, path: Option<&Path>) -> Result<&[DescriptiveStats; 2]> {
        let path = path.ok_or(HypotestError::FileNotSelected)?;
        match Analysis::load(path, &self.options) {
            Ok(analysis) => {
                info!(path = %path.display(), "analysis replaced");
                Ok(self.analysis.insert(analysis).describe())
            }
            Err(err) => {
                warn!(path = %path.display(), error = %err, "import failed");
                Err(err)
            }
        }
    }

    /// Sets the alpha text; it is validated when the test runs.
    pub fn set_alpha(&mut self, alpha: &str) {
        self.alpha = alpha.to_string();
    }

    #[must_use]
    pub fn alpha(&self) -> &str {
        &self.alpha
    }

    #[must_use]
    pub fn analysis(&self) -> Option<&Analysis> {
        self.analysis.as_ref()
    }

    /// Runs the test on the current analysis with the current alpha.
    ///
    /// # Errors
    ///
    /// [`HypotestError::NoData`] before any successful import, otherwise the
    /// errors of [`Analysis::evaluate`].
    pub fn run_test(&self) -> Result<Evaluation> {
        self.current()?.evaluate(Some(self.alpha.as_str()))
    }

    /// Exports the summary table.
    ///
    /// # Errors
    ///
    /// [`HypotestError::NoData`], [`HypotestError::FileNotSelected`], or
    /// [`HypotestError::OperationFailed`] for write failures.
    pub fn save_csv(&self, path: Option<&Path>) -> Result<()> {
        let analysis = self.current()?;
        let path = path.ok_or(HypotestError::FileNotSelected)?;
        save_summary_csv(path, analysis.describe(), self.options.delimiter)
            .map_err(into_operation_failed)
    }

    /// Exports the plain-text summary.
    ///
    /// # Errors
    ///
    /// Same as [`Session::save_csv`].
    pub fn save_text(&self, path: Option<&Path>) -> Result<()> {
        let analysis = self.current()?;
        let path = path.ok_or(HypotestError::FileNotSelected)?;
        save_summary_text(path, analysis.describe()).map_err(into_operation_failed)
    }

    fn current(&self) -> Result<&Analysis> {
        self.analysis.as_ref().ok_or(HypotestError::NoData)
    }
}

fn into_operation_failed(err: HypotestError) -> HypotestError {
    match err {
        HypotestError::OperationFailed(_) => err,
        other => HypotestError::operation_failed(other),
    }
}
