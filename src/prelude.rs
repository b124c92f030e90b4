//! Convenience re-exports for common usage.
//!
//! # Usage
//!
//! ```
//! use hypotest::prelude::*;
//! ```

pub use crate::analysis::{Analysis, Evaluation};
pub use crate::config::Settings;
pub use crate::data::{load_csv, HeaderMode, LoadOptions, Sample, TwoSampleData};
pub use crate::decision::{decide, Decision, SignificanceLevel};
pub use crate::error::{HypotestError, Result};
pub use crate::session::Session;
pub use crate::stats::{ansari_bradley, AnsariBradleyResult, DescriptiveStats, PValueMethod};
