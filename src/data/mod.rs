//! Sample containers and the two-column data loader.
//!
//! A [`Sample`] is one group of observations; [`TwoSampleData`] is what a
//! successful load produces: exactly two groups plus their column labels.

mod loader;

pub use loader::{load_csv, parse_csv, HeaderMode, LoadOptions};

use crate::error::{HypotestError, Result};
use serde::Serialize;

/// An ordered, non-empty sequence of finite observations.
///
/// # Examples
///
/// ```
/// use hypotest::data::Sample;
///
/// let sample = Sample::new(vec![1.0, 2.0, 3.0]).expect("finite, non-empty values");
/// assert_eq!(sample.len(), 3);
/// assert!(Sample::new(vec![]).is_err());
/// assert!(Sample::new(vec![1.0, f64::NAN]).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Sample {
    values: Vec<f64>,
}

impl Sample {
    /// Creates a sample, rejecting empty input and non-finite values.
    ///
    /// # Errors
    ///
    /// Returns [`HypotestError::InvalidInput`] if `values` is empty or holds
    /// NaN or an infinity.
    pub fn new(values: Vec<f64>) -> Result<Self> {
        if values.is_empty() {
            return Err(HypotestError::empty_sample("no observations"));
        }
        if let Some(pos) = values.iter().position(|v| !v.is_finite()) {
            return Err(HypotestError::InvalidInput(format!(
                "non-numeric value {} at position {pos}",
                values[pos]
            )));
        }
        Ok(Self { values })
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` for a constructed sample.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.values.iter().copied().fold(f64::INFINITY, f64::min)
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl TryFrom<Vec<f64>> for Sample {
    type Error = HypotestError;

    fn try_from(values: Vec<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl TryFrom<&[f64]> for Sample {
    type Error = HypotestError;

    fn try_from(values: &[f64]) -> Result<Self> {
        Self::new(values.to_vec())
    }
}

impl AsRef<[f64]> for Sample {
    fn as_ref(&self) -> &[f64] {
        &self.values
    }
}

/// The two groups read from one input file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TwoSampleData {
    /// Column 1
    pub group1: Sample,
    /// Column 2
    pub group2: Sample,
    /// Header labels when the file had a header row
    pub labels: Option<[String; 2]>,
}

impl TwoSampleData {
    #[must_use]
    pub fn new(group1: Sample, group2: Sample) -> Self {
        Self {
            group1,
            group2,
            labels: None,
        }
    }

    /// Builds both samples from raw vectors.
    ///
    /// # Errors
    ///
    /// Returns [`HypotestError::InvalidInput`] naming the offending group.
    pub fn from_vecs(group1: Vec<f64>, group2: Vec<f64>) -> Result<Self> {
        let group1 = Sample::new(group1).map_err(|e| in_group(1, e))?;
        let group2 = Sample::new(group2).map_err(|e| in_group(2, e))?;
        Ok(Self::new(group1, group2))
    }
}

fn in_group(group: usize, err: HypotestError) -> HypotestError {
    match err {
        HypotestError::InvalidInput(msg) => {
            HypotestError::InvalidInput(format!("group {group}: {msg}"))
        }
        other => other,
    }
}
