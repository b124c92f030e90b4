//! Hypotest: two-sample dispersion comparison with the Ansari-Bradley test.
//!
//! Load two columns of numbers, describe each group, test whether both
//! groups share the same scale, and export the summary.
//!
//! # Quick Start
//!
//! ```
//! use hypotest::prelude::*;
//!
//! let analysis = Analysis::from_vecs(
//!     vec![1.0, 2.0, 3.0, 4.0, 5.0],
//!     vec![2.0, 4.0, 6.0, 8.0, 100.0],
//! )
//! .unwrap();
//!
//! let [group1, group2] = analysis.describe();
//! assert_eq!(group1.mean, 3.0);
//! assert_eq!(group2.median, 6.0);
//!
//! let evaluation = analysis.evaluate(Some("0.05")).unwrap();
//! assert_eq!(evaluation.decision, Decision::HypothesisAccepted);
//! assert_eq!(evaluation.decision.label(), "Гипотеза принята");
//! ```
//!
//! # Modules
//!
//! - [`data`]: Samples and the two-column CSV loader
//! - [`stats`]: Descriptive statistics, histograms and the Ansari-Bradley test
//! - [`decision`]: Significance level parsing and the decision label
//! - [`analysis`]: A loaded pair of samples with their statistics
//! - [`session`]: The mutable state behind interactive user actions
//! - [`report`]: Dialog texts, user messages and summary exports
//! - [`config`]: TOML settings

pub mod analysis;
pub mod config;
pub mod data;
pub mod decision;
pub mod error;
pub mod prelude;
pub mod report;
pub mod session;
pub mod stats;

pub use error::{HypotestError, Result};
