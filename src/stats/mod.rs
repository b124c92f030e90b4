//! Descriptive statistics and the two-sample dispersion test.
//!
//! - Mean, sample standard deviation (`n - 1` denominator) and median
//! - Equal-width histograms for plotting
//! - Midrank assignment for pooled samples
//! - Ansari-Bradley test for equal scale
//!
//! # Examples
//!
//! ```
//! use hypotest::data::Sample;
//! use hypotest::stats::DescriptiveStats;
//!
//! let sample = Sample::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]).expect("valid sample");
//! let stats = DescriptiveStats::from_sample(&sample);
//!
//! assert_eq!(stats.mean, 3.0);
//! assert_eq!(stats.median, 3.0);
//! assert!((stats.std_dev - 1.581_138_830).abs() < 1e-6);
//! ```

pub mod ansari;
pub mod ranks;

pub use ansari::{ansari_bradley, AnsariBradleyResult, PValueMethod, EXACT_SAMPLE_LIMIT};
pub use ranks::{has_ties, midranks};

use crate::data::Sample;
use crate::error::{HypotestError, Result};
use serde::Serialize;

/// Number of bins per group in the histogram overlay.
pub const DEFAULT_HISTOGRAM_BINS: usize = 20;

/// Mean, sample standard deviation and median of one sample.
///
/// `std_dev` is NaN for a single observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DescriptiveStats {
    pub mean: f64,
    pub std_dev: f64,
    pub median: f64,
}

impl DescriptiveStats {
    /// Computes the statistics of a validated sample.
    #[must_use]
    pub fn from_sample(sample: &Sample) -> Self {
        let values = sample.as_slice();
        let mean = mean_unchecked(values);
        Self {
            mean,
            std_dev: std_dev_around(values, mean),
            median: median_unchecked(values),
        }
    }

    /// Computes the statistics of a raw slice.
    ///
    /// # Errors
    ///
    /// Returns [`HypotestError::InvalidInput`] for an empty slice or
    /// non-finite values.
    pub fn from_slice(values: &[f64]) -> Result<Self> {
        Ok(Self::from_sample(&Sample::try_from(values)?))
    }
}

/// Arithmetic mean.
///
/// # Errors
///
/// Returns [`HypotestError::InvalidInput`] for an empty slice.
pub fn mean(values: &[f64]) -> Result<f64> {
    ensure_non_empty(values, "mean")?;
    Ok(mean_unchecked(values))
}

/// Sample standard deviation with the `n - 1` denominator.
///
/// A single observation yields NaN rather than an error.
///
/// # Errors
///
/// Returns [`HypotestError::InvalidInput`] for an empty slice.
pub fn std_dev(values: &[f64]) -> Result<f64> {
    ensure_non_empty(values, "standard deviation")?;
    Ok(std_dev_around(values, mean_unchecked(values)))
}

/// Median: the middle value, or the mean of the two middle values.
///
/// # Errors
///
/// Returns [`HypotestError::InvalidInput`] for an empty slice.
pub fn median(values: &[f64]) -> Result<f64> {
    ensure_non_empty(values, "median")?;
    Ok(median_unchecked(values))
}

fn ensure_non_empty(values: &[f64], what: &str) -> Result<()> {
    if values.is_empty() {
        return Err(HypotestError::empty_sample(&format!(
            "cannot compute {what} of an empty sample"
        )));
    }
    Ok(())
}

fn mean_unchecked(values: &[f64]) -> f64 {
    let n = values.len() as f64;
    let sum = values.iter().sum::<f64>();
    if sum.is_finite() {
        sum / n
    } else {
        // the plain sum overflowed; scale each term first
        values.iter().map(|&x| x / n).sum()
    }
}

fn std_dev_around(values: &[f64], mean: f64) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }
    let dof = (n - 1) as f64;
    let ss = values.iter().map(|&x| (x - mean).powi(2)).sum::<f64>();
    if ss.is_finite() {
        return (ss / dof).sqrt();
    }

    // squared deviations overflowed; work relative to the largest deviation
    let halves: Vec<f64> = values.iter().map(|&x| x / 2.0 - mean / 2.0).collect();
    let scale = halves.iter().fold(0.0_f64, |acc, d| acc.max(d.abs()));
    let scaled_ss = halves.iter().map(|d| (d / scale).powi(2)).sum::<f64>();
    2.0 * scale * (scaled_ss / dof).sqrt()
}

fn median_unchecked(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        let (a, b) = (sorted[n / 2 - 1], sorted[n / 2]);
        let mid = (a + b) / 2.0;
        if mid.is_finite() {
            mid
        } else {
            a / 2.0 + b / 2.0
        }
    }
}

/// Equal-width histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Histogram {
    /// Bin edges (length = `bins + 1`)
    pub edges: Vec<f64>,
    /// Bin counts (length = `bins`)
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Builds `bins` equal-width bins spanning the data range.
    ///
    /// A constant sample gets the range `[v - 0.5, v + 0.5]`.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty slice or zero bins.
    ///
    /// # Examples
    ///
    /// ```
    /// use hypotest::stats::Histogram;
    ///
    /// let hist = Histogram::new(&[1.0, 2.0, 3.0, 4.0, 5.0], 4).expect("valid histogram");
    /// assert_eq!(hist.edges.len(), 5);
    /// assert_eq!(hist.counts, vec![1, 1, 1, 2]);
    /// ```
    pub fn new(values: &[f64], bins: usize) -> Result<Self> {
        ensure_non_empty(values, "histogram")?;
        let lo = values.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Self::with_range(values, bins, lo, hi)
    }

    /// Builds `bins` equal-width bins over `[lo, hi]`; values outside are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty slice or zero bins. A range that is not
    /// finite, or whose width overflows `f64`, is also rejected.
    pub fn with_range(values: &[f64], bins: usize, lo: f64, hi: f64) -> Result<Self> {
        ensure_non_empty(values, "histogram")?;
        if bins == 0 {
            return Err(HypotestError::InvalidInput(
                "number of bins must be at least 1".to_string(),
            ));
        }
        if !lo.is_finite() || !hi.is_finite() || lo > hi {
            return Err(HypotestError::InvalidInput(format!(
                "invalid histogram range [{lo}, {hi}]"
            )));
        }
        let (lo, hi) = if lo == hi { (lo - 0.5, hi + 0.5) } else { (lo, hi) };

        let width = (hi - lo) / bins as f64;
        if !width.is_finite() {
            return Err(HypotestError::InvalidInput(format!(
                "histogram range [{lo}, {hi}] is too wide to split into bins"
            )));
        }
        let edges: Vec<f64> = (0..=bins).map(|i| lo + i as f64 * width).collect();

        let mut counts = vec![0usize; bins];
        for &v in values {
            if v < lo || v > hi {
                continue;
            }
            // value == hi lands in the last bin
            let idx = (((v - lo) / width) as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Ok(Self { edges, counts })
    }

    #[must_use]
    pub fn bins(&self) -> usize {
        self.counts.len()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    #[must_use]
    pub fn max_count(&self) -> usize {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    /// `(start, end, count)` per bin.
    pub fn iter_bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, &c)| (self.edges[i], self.edges[i + 1], c))
    }
}

/// Histograms of both groups over one shared range, for side-by-side display.
///
/// # Errors
///
/// Returns an error for zero bins.
pub fn overlay_histograms(
    group1: &Sample,
    group2: &Sample,
    bins: usize,
) -> Result<(Histogram, Histogram)> {
    let lo = group1.min().min(group2.min());
    let hi = group1.max().max(group2.max());
    Ok((
        Histogram::with_range(group1.as_slice(), bins, lo, hi)?,
        Histogram::with_range(group2.as_slice(), bins, lo, hi)?,
    ))
}

#[cfg(test)]
mod tests_ansari_contract;

#[cfg(test)]
mod tests_descriptive_contract;

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_mean_empty() {
        assert!(mean(&[]).is_err());
    }

    #[test]
    fn test_std_dev_single_is_nan() {
        let sd = std_dev(&[42.0]).expect("single element is accepted");
        assert!(sd.is_nan());
    }

    #[test]
    fn test_std_dev_constant_is_zero() {
        assert_eq!(std_dev(&[3.0, 3.0, 3.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_median_even_length() {
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]).unwrap(), 2.5);
    }

    #[test]
    fn test_median_unsorted_odd() {
        assert_eq!(median(&[9.0, -1.0, 5.0]).unwrap(), 5.0);
    }

    #[test]
    fn test_descriptive_with_outlier() {
        let stats = DescriptiveStats::from_slice(&[2.0, 4.0, 6.0, 8.0, 100.0]).unwrap();
        assert_relative_eq!(stats.mean, 24.0);
        assert_relative_eq!(stats.median, 6.0);
        assert_relative_eq!(stats.std_dev, 1810.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_descriptive_from_slice_rejects_nan() {
        assert!(DescriptiveStats::from_slice(&[1.0, f64::NAN]).is_err());
    }

    #[test]
    fn test_histogram_zero_bins() {
        assert!(Histogram::new(&[1.0, 2.0], 0).is_err());
    }

    #[test]
    fn test_histogram_constant_values() {
        let hist = Histogram::new(&[5.0, 5.0, 5.0], 20).unwrap();
        assert_eq!(hist.bins(), 20);
        assert_eq!(hist.total(), 3);
        assert_relative_eq!(hist.edges[0], 4.5);
        assert_relative_eq!(hist.edges[20], 5.5);
    }

    #[test]
    fn test_histogram_max_lands_in_last_bin() {
        let hist = Histogram::new(&[0.0, 10.0], 20).unwrap();
        assert_eq!(hist.counts[0], 1);
        assert_eq!(hist.counts[19], 1);
    }

    #[test]
    fn test_histogram_with_range_skips_outside() {
        let hist = Histogram::with_range(&[-5.0, 0.5, 2.0], 2, 0.0, 1.0).unwrap();
        assert_eq!(hist.total(), 1);
    }

    #[test]
    fn test_overlay_shares_edges() {
        let a = Sample::new(vec![1.0, 2.0, 3.0]).unwrap();
        let b = Sample::new(vec![0.0, 10.0]).unwrap();
        let (ha, hb) = overlay_histograms(&a, &b, 20).unwrap();
        assert_eq!(ha.edges, hb.edges);
        assert_relative_eq!(ha.edges[0], 0.0);
        assert_relative_eq!(ha.edges[20], 10.0);
        assert_eq!(ha.total(), 3);
        assert_eq!(hb.total(), 2);
    }

    #[test]
    fn test_histogram_rejects_overflowing_range() {
        let err = Histogram::new(&[-1e308, 1e308], 20).unwrap_err();
        assert!(matches!(err, HypotestError::InvalidInput(_)));
        assert!(err.to_string().contains("too wide"));

        let a = Sample::new(vec![-1e308, 0.0]).unwrap();
        let b = Sample::new(vec![1e308]).unwrap();
        assert!(overlay_histograms(&a, &b, 20).is_err());
    }

    #[test]
    fn test_histogram_wide_but_finite_range() {
        let hist = Histogram::new(&[-1e200, 1e200], 20).unwrap();
        assert!(hist.edges.iter().all(|e| e.is_finite()));
        assert_eq!(hist.total(), 2);
    }

    #[test]
    fn test_extreme_values_keep_finite_stats() {
        let stats = DescriptiveStats::from_slice(&[-1e308, 1e308]).unwrap();
        assert_eq!(stats.mean, 0.0);
        assert!(stats.std_dev.is_finite());
        assert_relative_eq!(stats.std_dev, 2.0_f64.sqrt() * 1e308, max_relative = 1e-12);

        let stats = DescriptiveStats::from_slice(&[1e308, 1.5e308]).unwrap();
        assert_relative_eq!(stats.mean, 1.25e308, max_relative = 1e-12);
        assert_relative_eq!(stats.median, 1.25e308, max_relative = 1e-12);
    }

    #[test]
    fn test_iter_bins_matches_edges() {
        let hist = Histogram::new(&[0.0, 1.0, 2.0, 3.0], 3).unwrap();
        let bins: Vec<_> = hist.iter_bins().collect();
        assert_eq!(bins.len(), 3);
        assert_relative_eq!(bins[2].1, 3.0);
        assert_eq!(bins.iter().map(|b| b.2).sum::<usize>(), 4);
    }
}
