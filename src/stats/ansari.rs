//! Ansari-Bradley test for equality of scale.
//!
//! H₀: both samples have the same dispersion
//! H₁: the dispersions differ (two-sided)
//!
//! The test assumes both samples share a common median; this is not checked.
//!
//! # Statistic
//!
//! Pool the `N = n + m` observations, rank them (midranks for ties) and map
//! each rank `r` to the score `min(r, N - r + 1)`. The statistic `AB` is the
//! sum of the scores of the first sample. Small `AB` means the first sample
//! is more spread out; large `AB` means it is more concentrated.
//!
//! # P-value
//!
//! Exact when both samples have fewer than [`EXACT_SAMPLE_LIMIT`]
//! observations and there are no ties, otherwise a normal approximation
//! (tie-corrected variance when needed).
//!
//! # Example
//!
//! ```
//! use hypotest::stats::{ansari_bradley, PValueMethod};
//!
//! let narrow = [-1.0, -0.5, 0.5, 1.0];
//! let wide = [-10.0, -5.0, 5.0, 10.0];
//! let result = ansari_bradley(&narrow, &wide).expect("valid samples");
//!
//! assert_eq!(result.statistic, 14.0);
//! assert_eq!(result.method, PValueMethod::Exact);
//! assert!((result.pvalue - 2.0 / 70.0).abs() < 1e-12);
//! ```

use super::ranks::{has_ties, midranks};
use crate::error::{HypotestError, Result};
use serde::Serialize;
use statrs::function::erf::erfc;
use std::f64::consts::SQRT_2;
use tracing::debug;

/// Samples at or above this size use the normal approximation.
pub const EXACT_SAMPLE_LIMIT: usize = 55;

/// How the p-value was obtained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PValueMethod {
    /// Enumerated null distribution
    Exact,
    /// Normal approximation
    NormalApprox,
}

/// Result of an Ansari-Bradley test.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnsariBradleyResult {
    /// AB statistic (sum of scores of the first sample)
    pub statistic: f64,

    /// Two-sided p-value
    pub pvalue: f64,

    /// Null distribution used for the p-value
    pub method: PValueMethod,

    /// Size of the first sample
    pub n1: usize,

    /// Size of the second sample
    pub n2: usize,
}

/// Two-sided Ansari-Bradley test.
///
/// # Arguments
///
/// * `group1` - First sample
/// * `group2` - Second sample
///
/// # Errors
///
/// Returns [`HypotestError::InvalidInput`] if either sample is empty, holds
/// non-finite values, or every pooled observation is tied.
pub fn ansari_bradley(group1: &[f64], group2: &[f64]) -> Result<AnsariBradleyResult> {
    validate(group1, "group 1")?;
    validate(group2, "group 2")?;

    let n = group1.len();
    let m = group2.len();
    let total = n + m;

    let pooled: Vec<f64> = group1.iter().chain(group2).copied().collect();
    if pooled.iter().all(|&v| v == pooled[0]) {
        return Err(HypotestError::InvalidInput(
            "zero variance: all pooled observations are tied".to_string(),
        ));
    }
    let scores: Vec<f64> = midranks(&pooled)
        .into_iter()
        .map(|r| r.min(total as f64 - r + 1.0))
        .collect();
    let statistic: f64 = scores[..n].iter().sum();

    let ties = has_ties(&pooled);
    let (pvalue, method) = if n < EXACT_SAMPLE_LIMIT && m < EXACT_SAMPLE_LIMIT && !ties {
        (exact_pvalue(statistic, n, total), PValueMethod::Exact)
    } else {
        if ties && n < EXACT_SAMPLE_LIMIT && m < EXACT_SAMPLE_LIMIT {
            debug!("ties present, using normal approximation");
        }
        let tie_scores = ties.then_some(scores.as_slice());
        (
            normal_pvalue(statistic, n, m, tie_scores)?,
            PValueMethod::NormalApprox,
        )
    };

    debug!(statistic, pvalue, ?method, n, m, "ansari-bradley test");

    Ok(AnsariBradleyResult {
        statistic,
        pvalue,
        method,
        n1: n,
        n2: m,
    })
}

fn validate(sample: &[f64], name: &str) -> Result<()> {
    if sample.is_empty() {
        return Err(HypotestError::empty_sample(name));
    }
    if sample.iter().any(|v| !v.is_finite()) {
        return Err(HypotestError::InvalidInput(format!(
            "{name} contains non-numeric values"
        )));
    }
    Ok(())
}

/// Integer scores `min(i, N - i + 1)` for ranks `1..=N`.
fn untied_scores(total: usize) -> Vec<usize> {
    (1..=total).map(|i| i.min(total + 1 - i)).collect()
}

/// Null frequencies of the score sum over all `n`-subsets of the `N` scores,
/// starting at the smallest achievable sum.
///
/// Returns `(smallest_sum, frequencies)`.
fn null_distribution(n: usize, total: usize) -> (usize, Vec<f64>) {
    let mut scores = untied_scores(total);
    scores.sort_unstable();
    let min_sum: usize = scores[..n].iter().sum();
    let max_sum: usize = scores[total - n..].iter().sum();

    // counts[k][s]: subsets of size k with score sum s
    let mut counts = vec![vec![0.0_f64; max_sum + 1]; n + 1];
    counts[0][0] = 1.0;
    for (seen, &score) in scores.iter().enumerate() {
        for k in (1..=n.min(seen + 1)).rev() {
            let (lower, upper) = counts.split_at_mut(k);
            let prev = &lower[k - 1];
            let cur = &mut upper[0];
            for s in (score..=max_sum).rev() {
                cur[s] += prev[s - score];
            }
        }
    }

    let freqs = counts.swap_remove(n).split_off(min_sum);
    (min_sum, freqs)
}

fn exact_pvalue(statistic: f64, n: usize, total: usize) -> f64 {
    let (start, freqs) = null_distribution(n, total);
    let all: f64 = freqs.iter().sum();
    // untied scores are integers, so the statistic is too
    let ind = (statistic.round() as usize).saturating_sub(start);

    let tail: f64 = if (ind as f64) < freqs.len() as f64 / 2.0 {
        freqs[..=ind.min(freqs.len() - 1)].iter().sum()
    } else {
        freqs[ind.min(freqs.len() - 1)..].iter().sum()
    };
    (2.0 * tail / all).min(1.0)
}

fn normal_pvalue(statistic: f64, n: usize, m: usize, tie_scores: Option<&[f64]>) -> Result<f64> {
    let nf = n as f64;
    let mf = m as f64;
    let big_n = (n + m) as f64;
    let odd = (n + m) % 2 == 1;

    let expected = if odd {
        nf * (big_n + 1.0).powi(2) / (4.0 * big_n)
    } else {
        nf * (big_n + 2.0) / 4.0
    };

    let variance = match (tie_scores, odd) {
        (None, true) => nf * mf * (big_n + 1.0) * (3.0 + big_n * big_n) / (48.0 * big_n * big_n),
        (None, false) => mf * nf * (big_n + 2.0) * (big_n - 2.0) / (48.0 * (big_n - 1.0)),
        (Some(scores), true) => {
            let fac: f64 = scores.iter().map(|a| a * a).sum();
            mf * nf * (16.0 * big_n * fac - (big_n + 1.0).powi(4))
                / (16.0 * big_n * big_n * (big_n - 1.0))
        }
        (Some(scores), false) => {
            let fac: f64 = scores.iter().map(|a| a * a).sum();
            mf * nf * (16.0 * fac - big_n * (big_n + 2.0).powi(2))
                / (16.0 * big_n * (big_n - 1.0))
        }
    };

    if !(variance.is_finite() && variance > 0.0) {
        return Err(HypotestError::InvalidInput(format!(
            "degenerate null variance {variance}"
        )));
    }

    let z = (expected - statistic) / variance.sqrt();
    Ok(erfc(z.abs() / SQRT_2).min(1.0))
}
