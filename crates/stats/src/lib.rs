//! Statistical helpers for climate index computation.
//!
//! `NaN` is the missing-value marker throughout the workspace. Every
//! helper here excludes it from the population before reducing.

/// Iterator over the non-missing values of a slice.
fn present(data: &[f64]) -> impl Iterator<Item = f64> + '_ {
    data.iter().copied().filter(|v| !v.is_nan())
}

/// Arithmetic mean of the non-missing values. Returns `None` if none remain.
pub fn nan_mean(data: &[f64]) -> Option<f64> {
    let (sum, n) = present(data).fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    if n == 0 { None } else { Some(sum / n as f64) }
}

/// Largest non-missing value. Returns `None` if none remain.
pub fn nan_max(data: &[f64]) -> Option<f64> {
    present(data).reduce(f64::max)
}

/// Smallest non-missing value. Returns `None` if none remain.
pub fn nan_min(data: &[f64]) -> Option<f64> {
    present(data).reduce(f64::min)
}

/// Sum of the non-missing values (0.0 for an empty or all-missing slice).
pub fn nan_sum(data: &[f64]) -> f64 {
    present(data).sum()
}

/// Non-missing values sorted ascending.
pub fn sorted_present(data: &[f64]) -> Vec<f64> {
    let mut sorted: Vec<f64> = present(data).collect();
    sorted.sort_by(f64::total_cmp);
    sorted
}

/// R's default quantile algorithm (type=7), `p` in `[0, 1]`.
///
/// **Expects pre-sorted, missing-free input** (caller's responsibility).
///
/// # Panics
///
/// Panics if `sorted` is empty.
pub fn quantile_type7(sorted: &[f64], p: f64) -> f64 {
    assert!(
        !sorted.is_empty(),
        "quantile_type7: input must not be empty"
    );
    let n = sorted.len();
    let h = (n - 1) as f64 * p;
    let lo = h.floor() as usize;
    let hi = (lo + 1).min(n - 1);
    sorted[lo] + (h - h.floor()) * (sorted[hi] - sorted[lo])
}

/// Linearly interpolated percentile (`percentile` in `[0, 100]`) of the
/// non-missing values of `data`.
///
/// The rank is `percentile / 100 * (n - 1)`, interpolated between its floor
/// and ceiling order statistics. Returns `None` when no value remains.
pub fn percentile(data: &[f64], percentile: f64) -> Option<f64> {
    let sorted = sorted_present(data);
    if sorted.is_empty() {
        return None;
    }
    Some(quantile_type7(&sorted, percentile / 100.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const NAN: f64 = f64::NAN;

    #[test]
    fn test_nan_mean() {
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_relative_eq!(nan_mean(&data).unwrap(), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_nan_mean_skips_missing() {
        assert_relative_eq!(nan_mean(&[1.0, NAN, 3.0]).unwrap(), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_nan_mean_all_missing() {
        assert!(nan_mean(&[NAN, NAN]).is_none());
        assert!(nan_mean(&[]).is_none());
    }

    #[test]
    fn test_nan_max_min() {
        let data = [3.0, NAN, -1.5, 8.25, NAN];
        assert_eq!(nan_max(&data), Some(8.25));
        assert_eq!(nan_min(&data), Some(-1.5));
        assert_eq!(nan_max(&[NAN]), None);
        assert_eq!(nan_min(&[]), None);
    }

    #[test]
    fn test_nan_sum() {
        assert_relative_eq!(nan_sum(&[1.5, NAN, 2.5]), 4.0, epsilon = 1e-12);
        assert_eq!(nan_sum(&[NAN]), 0.0);
    }

    #[test]
    fn test_sorted_present() {
        assert_eq!(sorted_present(&[3.0, NAN, 1.0, 2.0]), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_quantile_type7_median() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(quantile_type7(&sorted, 0.5), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quantile_type7_endpoints() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_relative_eq!(quantile_type7(&sorted, 0.0), 1.0, epsilon = 1e-12);
        assert_relative_eq!(quantile_type7(&sorted, 1.0), 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_quantile_type7_interpolation() {
        let sorted = [1.0, 2.0, 3.0, 4.0, 5.0];
        // p=0.1 → h=0.4, lo=0, hi=1 → 1 + 0.4*(2-1) = 1.4
        assert_relative_eq!(quantile_type7(&sorted, 0.1), 1.4, epsilon = 1e-12);
    }

    #[test]
    fn test_percentile_one_to_hundred() {
        // rank = 0.9 * 99 = 89.1 → 90 + 0.1 * (91 - 90)
        let data: Vec<f64> = (1..=100).map(f64::from).collect();
        assert_relative_eq!(percentile(&data, 90.0).unwrap(), 90.1, epsilon = 1e-9);
        assert_relative_eq!(percentile(&data, 10.0).unwrap(), 10.9, epsilon = 1e-9);
    }

    #[test]
    fn test_percentile_unsorted_with_missing() {
        let data = [5.0, NAN, 1.0, 3.0, NAN, 2.0, 4.0];
        assert_relative_eq!(percentile(&data, 50.0).unwrap(), 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_percentile_single_value() {
        assert_eq!(percentile(&[7.0], 90.0), Some(7.0));
    }

    #[test]
    fn test_percentile_empty_population() {
        assert!(percentile(&[NAN, NAN], 90.0).is_none());
    }

    #[test]
    #[should_panic(expected = "quantile_type7: input must not be empty")]
    fn test_quantile_type7_empty_panics() {
        quantile_type7(&[], 0.5);
    }
}
