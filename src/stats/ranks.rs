//! Ranking of pooled observations.

/// Ranks `values` from 1, giving tied observations the average of the ranks
/// they span.
///
/// # Examples
///
/// ```
/// use hypotest::stats::midranks;
///
/// assert_eq!(midranks(&[10.0, 20.0, 20.0, 5.0]), vec![2.0, 3.5, 3.5, 1.0]);
/// ```
#[must_use]
pub fn midranks(values: &[f64]) -> Vec<f64> {
    let n = values.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| values[a].total_cmp(&values[b]));

    let mut ranks = vec![0.0; n];
    let mut start = 0;
    while start < n {
        let mut end = start;
        while end + 1 < n && values[order[end + 1]] == values[order[start]] {
            end += 1;
        }
        // positions start..=end hold ranks start+1..=end+1
        let rank = (start + end) as f64 / 2.0 + 1.0;
        for &idx in &order[start..=end] {
            ranks[idx] = rank;
        }
        start = end + 1;
    }
    ranks
}

/// Whether any value occurs more than once.
#[must_use]
pub fn has_ties(values: &[f64]) -> bool {
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    sorted.windows(2).any(|w| w[0] == w[1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midranks_distinct() {
        assert_eq!(midranks(&[3.0, 1.0, 2.0]), vec![3.0, 1.0, 2.0]);
    }

    #[test]
    fn test_midranks_all_tied() {
        assert_eq!(midranks(&[7.0; 4]), vec![2.5; 4]);
    }

    #[test]
    fn test_midranks_pooled_example() {
        let pooled = [1.0, 2.0, 3.0, 4.0, 5.0, 2.0, 4.0, 6.0, 8.0, 100.0];
        let ranks = midranks(&pooled);
        assert_eq!(
            ranks,
            vec![1.0, 2.5, 4.0, 5.5, 7.0, 2.5, 5.5, 8.0, 9.0, 10.0]
        );
    }

    #[test]
    fn test_midranks_sum_is_triangular() {
        let values = [4.0, 4.0, 1.0, 9.0, 9.0, 9.0, 0.5];
        let total: f64 = midranks(&values).iter().sum();
        assert_eq!(total, 28.0);
    }

    #[test]
    fn test_midranks_empty() {
        assert!(midranks(&[]).is_empty());
    }

    #[test]
    fn test_has_ties() {
        assert!(has_ties(&[1.0, 2.0, 1.0]));
        assert!(!has_ties(&[1.0, 2.0, 3.0]));
        assert!(!has_ties(&[]));
    }

    #[test]
    fn test_negative_zero_ties_with_zero() {
        assert!(has_ties(&[-0.0, 0.0]));
        assert_eq!(midranks(&[0.0, -0.0]), vec![1.5, 1.5]);
    }
}
