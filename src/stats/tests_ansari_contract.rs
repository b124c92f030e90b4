// =========================================================================
// FALSIFY-AB: Ansari-Bradley test contract
//
// References:
//   - Ansari & Bradley (1960) "Rank-sum tests for dispersions"
//   - Hollander & Wolfe (1973) "Nonparametric Statistical Methods", p. 86
// =========================================================================

use super::*;

/// Serum iron determinations (Hollander & Wolfe), two methods
const RAMSAY: [f64; 20] = [
    111.0, 107.0, 100.0, 99.0, 102.0, 106.0, 109.0, 108.0, 104.0, 99.0, 101.0, 96.0, 97.0, 102.0,
    107.0, 113.0, 116.0, 113.0, 110.0, 98.0,
];
const VAN_EDEN: [f64; 20] = [
    107.0, 108.0, 106.0, 98.0, 105.0, 103.0, 110.0, 105.0, 104.0, 100.0, 96.0, 108.0, 103.0, 104.0,
    114.0, 114.0, 113.0, 108.0, 106.0, 99.0,
];

/// FALSIFY-AB-001: Reference data reproduces AB = 185.5, p = 0.1815
#[test]
fn falsify_ab_001_serum_iron_reference() {
    let result = ansari_bradley(&RAMSAY, &VAN_EDEN).expect("valid input");

    assert_eq!(result.method, PValueMethod::NormalApprox);
    assert!(
        (result.statistic - 185.5).abs() < 1e-9,
        "FALSIFIED AB-001: AB={}, expected 185.5",
        result.statistic
    );
    assert!(
        (result.pvalue - 0.181_458_199_728_670_7).abs() < 1e-9,
        "FALSIFIED AB-001: p={}, expected 0.1815",
        result.pvalue
    );
}

/// FALSIFY-AB-002: p-value is in [0, 1]
#[test]
fn falsify_ab_002_pvalue_bounded() {
    let cases: [(&[f64], &[f64]); 4] = [
        (&[1.0, 2.0, 3.0], &[10.0, 20.0]),
        (&[1.0, 2.0, 3.0, 4.0, 5.0], &[2.0, 4.0, 6.0, 8.0, 100.0]),
        (&[0.1, 0.2], &[-50.0, 50.0, 0.15]),
        (&RAMSAY, &VAN_EDEN),
    ];
    for (x, y) in cases {
        let result = ansari_bradley(x, y).expect("valid input");
        assert!(
            (0.0..=1.0).contains(&result.pvalue),
            "FALSIFIED AB-002: p={} outside [0,1]",
            result.pvalue
        );
    }
}

/// FALSIFY-AB-003: Swapping groups keeps the two-sided p-value
#[test]
fn falsify_ab_003_swap_symmetric_pvalue() {
    let forward = ansari_bradley(&RAMSAY, &VAN_EDEN).expect("valid input");
    let backward = ansari_bradley(&VAN_EDEN, &RAMSAY).expect("valid input");

    assert!(
        (forward.pvalue - backward.pvalue).abs() < 1e-12,
        "FALSIFIED AB-003: p changed under swap ({} vs {})",
        forward.pvalue,
        backward.pvalue
    );
    // no tie straddles the centre, so the scores still sum to N(N+2)/4
    assert!((forward.statistic + backward.statistic - 420.0).abs() < 1e-9);
}

/// FALSIFY-AB-004: Exact test detects a clearly wider second sample
#[test]
fn falsify_ab_004_detects_dispersion_difference() {
    let narrow = [-0.3, -0.2, -0.1, 0.05, 0.15, 0.25, 0.35];
    let wide = [-9.0, -7.0, -5.0, 4.5, 6.5, 8.5, 10.5];
    let result = ansari_bradley(&narrow, &wide).expect("valid input");

    assert_eq!(result.method, PValueMethod::Exact);
    assert!(
        result.pvalue < 0.05,
        "FALSIFIED AB-004: p={} >= 0.05 for clearly different spreads",
        result.pvalue
    );
}

/// FALSIFY-AB-005: Identical calls give identical results
#[test]
fn falsify_ab_005_deterministic() {
    let a = ansari_bradley(&RAMSAY, &VAN_EDEN).expect("valid input");
    let b = ansari_bradley(&RAMSAY, &VAN_EDEN).expect("valid input");
    assert_eq!(a, b);
}
