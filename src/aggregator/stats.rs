//! Order statistics over sample slices.
//!
//! Both functions return `None` where the statistic is undefined instead of
//! falling back to zero, so callers can tell "no data" from a real `0.0`.

/// Median of `values`
///
/// Even-sized inputs yield the mean of the two middle values.
/// Returns `None` for an empty slice.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }

    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Sample standard deviation (n - 1 denominator)
///
/// Undefined, and so `None`, for fewer than two values.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (n - 1.0);

    Some(variance.sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median_single_value() {
        assert_eq!(median(&[7.25]), Some(7.25));
    }

    #[test]
    fn test_median_even_count_averages_middle() {
        assert_eq!(median(&[2.0, 4.0]), Some(3.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
    }

    #[test]
    fn test_median_odd_count_unsorted_input() {
        assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
    }

    #[test]
    fn test_median_empty() {
        assert_eq!(median(&[]), None);
    }

    #[test]
    fn test_std_dev_sample() {
        // mean 5, squared deviations sum to 32, / 7
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        let sd = std_dev(&values).unwrap();
        assert!((sd - (32.0f64 / 7.0).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_std_dev_undefined_below_two() {
        assert_eq!(std_dev(&[]), None);
        assert_eq!(std_dev(&[1.0]), None);
    }

    #[test]
    fn test_std_dev_identical_values_is_zero() {
        assert_eq!(std_dev(&[3.0, 3.0]), Some(0.0));
    }
}
