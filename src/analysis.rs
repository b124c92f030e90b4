//! The loaded analysis: two samples, their statistics, and test evaluation.

use crate::data::{load_csv, LoadOptions, Sample, TwoSampleData};
use crate::decision::{decide, Decision};
use crate::error::Result;
use crate::stats::{
    ansari_bradley, overlay_histograms, AnsariBradleyResult, DescriptiveStats, Histogram,
};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Two samples and their descriptive statistics, built in one step by a
/// successful load and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use hypotest::analysis::Analysis;
/// use hypotest::decision::Decision;
///
/// let analysis = Analysis::from_vecs(
///     vec![1.0, 2.0, 3.0, 4.0, 5.0],
///     vec![2.0, 4.0, 6.0, 8.0, 100.0],
/// )
/// .expect("valid samples");
///
/// assert_eq!(analysis.describe()[0].mean, 3.0);
/// let evaluation = analysis.evaluate(Some("0.05")).expect("test runs");
/// assert_eq!(evaluation.decision, Decision::HypothesisAccepted);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    group1: Sample,
    group2: Sample,
    stats: [DescriptiveStats; 2],
    labels: Option<[String; 2]>,
    source: Option<PathBuf>,
}

/// Result of running the dispersion test with a given alpha.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Evaluation {
    pub test: AnsariBradleyResult,
    pub decision: Decision,
}

impl Analysis {
    /// Computes the statistics of already loaded samples.
    #[must_use]
    pub fn new(data: TwoSampleData) -> Self {
        let stats = [
            DescriptiveStats::from_sample(&data.group1),
            DescriptiveStats::from_sample(&data.group2),
        ];
        Self {
            group1: data.group1,
            group2: data.group2,
            stats,
            labels: data.labels,
            source: None,
        }
    }

    /// Builds an analysis from raw vectors.
    ///
    /// # Errors
    ///
    /// Returns [`crate::HypotestError::InvalidInput`] for an empty group or
    /// non-finite values.
    pub fn from_vecs(group1: Vec<f64>, group2: Vec<f64>) -> Result<Self> {
        Ok(Self::new(TwoSampleData::from_vecs(group1, group2)?))
    }

    /// Loads a file and computes the statistics.
    ///
    /// # Errors
    ///
    /// Propagates every loader error, see [`load_csv`].
    pub fn load(path: impl AsRef<Path>, options: &LoadOptions) -> Result<Self> {
        let path = path.as_ref();
        let mut analysis = Self::new(load_csv(path, options)?);
        analysis.source = Some(path.to_path_buf());
        Ok(analysis)
    }

    #[must_use]
    pub fn group1(&self) -> &Sample {
        &self.group1
    }

    #[must_use]
    pub fn group2(&self) -> &Sample {
        &self.group2
    }

    /// Header labels of the source file, if it had a header row.
    #[must_use]
    pub fn labels(&self) -> Option<&[String; 2]> {
        self.labels.as_ref()
    }

    #[must_use]
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// Statistics of group 1 and group 2.
    #[must_use]
    pub fn describe(&self) -> &[DescriptiveStats; 2] {
        &self.stats
    }

    /// Runs the Ansari-Bradley test and derives the decision label from
    /// `alpha`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::HypotestError::InvalidInput`] when the pooled data has
    /// zero variance.
    pub fn evaluate(&self, alpha: Option<&str>) -> Result<Evaluation> {
        let test = ansari_bradley(self.group1.as_slice(), self.group2.as_slice())?;
        let decision = decide(test.pvalue, alpha);
        info!(
            statistic = test.statistic,
            pvalue = test.pvalue,
            decision = ?decision,
            "hypothesis evaluated"
        );
        Ok(Evaluation { test, decision })
    }

    /// Per-group histograms over the pooled range.
    ///
    /// # Errors
    ///
    /// Returns an error for zero bins.
    pub fn histograms(&self, bins: usize) -> Result<(Histogram, Histogram)> {
        overlay_histograms(&self.group1, &self.group2, bins)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HypotestError;
    use approx::assert_relative_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn example() -> Analysis {
        Analysis::from_vecs(
            vec![1.0, 2.0, 3.0, 4.0, 5.0],
            vec![2.0, 4.0, 6.0, 8.0, 100.0],
        )
        .unwrap()
    }

    #[test]
    fn test_describe_both_groups() {
        let [s1, s2] = *example().describe();
        assert_relative_eq!(s1.mean, 3.0);
        assert_relative_eq!(s1.std_dev, 2.5_f64.sqrt(), epsilon = 1e-12);
        assert_relative_eq!(s1.median, 3.0);
        assert_relative_eq!(s2.mean, 24.0);
        assert_relative_eq!(s2.median, 6.0);
    }

    #[test]
    fn test_evaluate_valid_alpha() {
        let evaluation = example().evaluate(Some("0.05")).unwrap();
        assert_eq!(evaluation.decision, Decision::HypothesisAccepted);
        assert_relative_eq!(evaluation.test.statistic, 17.0);
    }

    #[test]
    fn test_evaluate_blank_alpha_still_runs_test() {
        let evaluation = example().evaluate(Some("")).unwrap();
        assert_eq!(evaluation.decision, Decision::NoSignificanceLevelSet);
        assert!((0.0..=1.0).contains(&evaluation.test.pvalue));
    }

    #[test]
    fn test_evaluate_all_tied_fails() {
        let analysis = Analysis::from_vecs(vec![2.0, 2.0], vec![2.0]).unwrap();
        let err = analysis.evaluate(Some("0.05")).unwrap_err();
        assert!(matches!(err, HypotestError::InvalidInput(_)));
    }

    #[test]
    fn test_load_records_source_and_labels() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "before,after\n1,2\n3,4\n5,6").unwrap();
        let analysis = Analysis::load(file.path(), &LoadOptions::default()).unwrap();
        assert_eq!(analysis.source(), Some(file.path()));
        assert_eq!(
            analysis.labels(),
            Some(&["before".to_string(), "after".to_string()])
        );
        assert_eq!(analysis.group2().as_slice(), &[2.0, 4.0, 6.0]);
    }

    #[test]
    fn test_histograms_default_bins() {
        let (h1, h2) = example().histograms(20).unwrap();
        assert_eq!(h1.bins(), 20);
        assert_eq!(h1.edges, h2.edges);
        assert_eq!(h1.total() + h2.total(), 10);
    }
}
