//! Settings file.
//!
//! ```toml
//! alpha = "0.05"
//! histogram_bins = 20
//! delimiter = ","
//! header = "auto"   # auto | present | absent
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use crate::data::{HeaderMode, LoadOptions};
use crate::decision::DEFAULT_ALPHA;
use crate::error::{HypotestError, Result};
use crate::stats::DEFAULT_HISTOGRAM_BINS;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// User settings, with the desktop tool's defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Alpha text, validated only when a test runs
    pub alpha: String,
    /// Bins per group in the histogram
    pub histogram_bins: usize,
    /// Single-character field delimiter for input and tabular export
    pub delimiter: String,
    /// Header handling for input files
    pub header: HeaderMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA.to_string(),
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            delimiter: ",".to_string(),
            header: HeaderMode::Auto,
        }
    }
}

impl Settings {
    /// Reads settings from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`HypotestError::Config`] if the file cannot be read, is not
    /// valid TOML, or holds invalid values.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| HypotestError::Config(format!("cannot read {}: {e}", path.display())))?;
        let settings = Self::from_toml_str(&text)?;
        debug!(path = %path.display(), ?settings, "settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`HypotestError::Config`] for malformed TOML, unknown keys,
    /// zero histogram bins, or a delimiter that is not one ASCII character.
    ///
    /// # Examples
    ///
    /// ```
    /// use hypotest::config::Settings;
    ///
    /// let settings = Settings::from_toml_str("alpha = \"0.01\"").expect("valid settings");
    /// assert_eq!(settings.alpha, "0.01");
    /// assert_eq!(settings.histogram_bins, 20);
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Self =
            toml::from_str(text).map_err(|e| HypotestError::Config(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        if self.histogram_bins == 0 {
            return Err(HypotestError::Config(
                "histogram_bins must be at least 1".to_string(),
            ));
        }
        self.delimiter_byte()?;
        Ok(())
    }

    /// The delimiter as a single byte.
    ///
    /// # Errors
    ///
    /// Returns [`HypotestError::Config`] unless the delimiter is exactly one
    /// ASCII character.
    pub fn delimiter_byte(&self) -> Result<u8> {
        match self.delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => Err(HypotestError::Config(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.delimiter
            ))),
        }
    }

    /// Loader options derived from these settings.
    ///
    /// # Errors
    ///
    /// Same as [`Settings::delimiter_byte`].
    pub fn load_options(&self) -> Result<LoadOptions> {
        Ok(LoadOptions {
            delimiter: self.delimiter_byte()?,
            header: self.header,
        })
    }
}
