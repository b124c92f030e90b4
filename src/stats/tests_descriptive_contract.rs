// =========================================================================
// FALSIFY-DS: descriptive statistics contract
//
// Each test tries to falsify one property of mean / std_dev / median that
// the statistics dialog and the exports rely on.
//
// References:
//   - Hyndman & Fan (1996) "Sample Quantiles in Statistical Packages"
// =========================================================================

use super::*;

/// FALSIFY-DS-001: Median of odd-length data is the middle value
#[test]
fn falsify_ds_001_median_odd() {
    let median = median(&[5.0, 1.0, 3.0, 2.0, 4.0]).expect("non-empty");

    assert!(
        (median - 3.0).abs() < 1e-12,
        "FALSIFIED DS-001: median={median}, expected 3.0"
    );
}

/// FALSIFY-DS-002: Median of even-length data averages the two middle values
#[test]
fn falsify_ds_002_median_even() {
    let median = median(&[10.0, 2.0, 8.0, 4.0]).expect("non-empty");

    assert!(
        (median - 6.0).abs() < 1e-12,
        "FALSIFIED DS-002: median={median}, expected 6.0"
    );
}

/// FALSIFY-DS-003: Mean lies within [min, max]
#[test]
fn falsify_ds_003_mean_bounded() {
    let data = [-3.5, 0.25, 7.0, 12.75, 1e3];
    let mean = mean(&data).expect("non-empty");

    assert!(
        (-3.5..=1e3).contains(&mean),
        "FALSIFIED DS-003: mean={mean} outside [min, max]"
    );
}

/// FALSIFY-DS-004: Standard deviation uses the n - 1 denominator
#[test]
fn falsify_ds_004_sample_std_dev() {
    let sd = std_dev(&[1.0, 2.0, 3.0, 4.0, 5.0]).expect("non-empty");

    assert!(
        (sd - 2.5_f64.sqrt()).abs() < 1e-12,
        "FALSIFIED DS-004: std_dev={sd}, expected sqrt(2.5)"
    );
}

/// FALSIFY-DS-005: A single observation surfaces NaN instead of failing
#[test]
fn falsify_ds_005_single_observation_nan() {
    let sample = Sample::new(vec![7.0]).expect("one finite value");
    let stats = DescriptiveStats::from_sample(&sample);

    assert_eq!(stats.mean, 7.0);
    assert_eq!(stats.median, 7.0);
    assert!(
        stats.std_dev.is_nan(),
        "FALSIFIED DS-005: std_dev={} for n=1",
        stats.std_dev
    );
}

/// FALSIFY-DS-006: Shifting the data moves mean and median but not std_dev
#[test]
fn falsify_ds_006_shift_invariance() {
    let base = DescriptiveStats::from_slice(&[1.0, 4.0, 9.0, 16.0]).expect("valid");
    let shifted = DescriptiveStats::from_slice(&[11.0, 14.0, 19.0, 26.0]).expect("valid");

    assert!((shifted.mean - base.mean - 10.0).abs() < 1e-12);
    assert!((shifted.median - base.median - 10.0).abs() < 1e-12);
    assert!(
        (shifted.std_dev - base.std_dev).abs() < 1e-12,
        "FALSIFIED DS-006: std_dev changed under shift"
    );
}
