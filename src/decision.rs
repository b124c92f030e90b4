//! Significance level parsing and the hypothesis decision.
//!
//! The decision is a categorical label derived from the alpha text the user
//! typed. A valid alpha always yields [`Decision::HypothesisAccepted`]; the
//! p-value is carried along but not compared with alpha.

use crate::error::{HypotestError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Alpha used when nothing else is configured.
pub const DEFAULT_ALPHA: &str = "0.05";

/// A significance level between 0 and 1, exclusive.
///
/// # Examples
///
/// ```
/// use hypotest::decision::SignificanceLevel;
///
/// let alpha = SignificanceLevel::parse(" 0.05 ").expect("valid alpha");
/// assert_eq!(alpha.value(), 0.05);
/// assert!(SignificanceLevel::parse("1").is_err());
/// assert!(SignificanceLevel::parse("").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct SignificanceLevel(f64);

impl SignificanceLevel {
    /// Parses alpha from user text. Surrounding whitespace is ignored when
    /// reading the number.
    ///
    /// # Errors
    ///
    /// - [`HypotestError::NoSignificanceLevelSet`] for empty text
    /// - [`HypotestError::InvalidAlpha`] for text that is not a number
    ///   (whitespace only included) or a value at or beyond 0 or 1
    pub fn parse(text: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(HypotestError::NoSignificanceLevelSet);
        }
        let trimmed = text.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| HypotestError::InvalidAlpha(trimmed.to_string()))?;
        Self::new(value).map_err(|_| HypotestError::InvalidAlpha(trimmed.to_string()))
    }

    /// Wraps a numeric alpha.
    ///
    /// # Errors
    ///
    /// Returns [`HypotestError::InvalidAlpha`] when `value <= 0` or
    /// `value >= 1`. NaN satisfies neither and is accepted.
    pub fn new(value: f64) -> Result<Self> {
        if value <= 0.0 || value >= 1.0 {
            Err(HypotestError::InvalidAlpha(value.to_string()))
        } else {
            Ok(Self(value))
        }
    }

    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl FromStr for SignificanceLevel {
    type Err = HypotestError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for SignificanceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome label shown to the user after a test run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    NoSignificanceLevelSet,
    InvalidAlpha,
    HypothesisAccepted,
}

impl Decision {
    /// User-facing label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Decision::NoSignificanceLevelSet => "Не задан уровень значимости",
            Decision::InvalidAlpha => "Некорректное значение альфа",
            Decision::HypothesisAccepted => "Гипотеза принята",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps the alpha text to a decision label.
///
/// `p_value` does not influence the outcome: any valid alpha gives
/// [`Decision::HypothesisAccepted`].
///
/// # Examples
///
/// ```
/// use hypotest::decision::{decide, Decision};
///
/// assert_eq!(decide(0.3, None), Decision::NoSignificanceLevelSet);
/// assert_eq!(decide(0.3, Some("abc")), Decision::InvalidAlpha);
/// assert_eq!(decide(0.001, Some("0.05")), Decision::HypothesisAccepted);
/// ```
#[must_use]
pub fn decide(p_value: f64, alpha: Option<&str>) -> Decision {
    let Some(text) = alpha else {
        return Decision::NoSignificanceLevelSet;
    };
    match SignificanceLevel::parse(text) {
        Ok(level) => {
            tracing::debug!(p_value, alpha = level.value(), "alpha accepted");
            Decision::HypothesisAccepted
        }
        Err(HypotestError::NoSignificanceLevelSet) => Decision::NoSignificanceLevelSet,
        Err(_) => Decision::InvalidAlpha,
    }
}
