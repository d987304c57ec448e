//! Descriptive statistics primitives shared by the chart engines.

/// Arithmetic mean; 0.0 for an empty slice.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (Bessel-corrected, divisor n-1).
///
/// Fewer than two points carry no dispersion information; returns 0.0.
pub fn sample_std(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return 0.0;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m) * (v - m)).sum();
    (ss / (n - 1) as f64).sqrt()
}

/// Moving ranges `|x[i] - x[i-1]|` for successive points.
pub fn moving_ranges(values: &[f64]) -> Vec<f64> {
    values.windows(2).map(|w| (w[1] - w[0]).abs()).collect()
}

/// Minimum of a slice; 0.0 for an empty slice.
pub fn min(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::INFINITY, f64::min)
}

/// Maximum of a slice; 0.0 for an empty slice.
pub fn max(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().copied().fold(f64::NEG_INFINITY, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_mean() {
        assert_abs_diff_eq!(mean(&[1.0, 2.0, 3.0]), 2.0);
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn test_sample_std_bessel() {
        // Known: std([2, 4, 4, 4, 5, 5, 7, 9], ddof=1) = 2.13809...
        let data = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert_abs_diff_eq!(sample_std(&data), 2.138089935299395, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_std_degenerate() {
        assert_eq!(sample_std(&[]), 0.0);
        assert_eq!(sample_std(&[3.0]), 0.0);
        assert_eq!(sample_std(&[5.0, 5.0, 5.0]), 0.0);
    }

    #[test]
    fn test_moving_ranges() {
        assert_eq!(moving_ranges(&[1.0, 3.0, 2.0]), vec![2.0, 1.0]);
        assert!(moving_ranges(&[1.0]).is_empty());
    }

    #[test]
    fn test_min_max() {
        let data = [3.0, -1.0, 2.0];
        assert_eq!(min(&data), -1.0);
        assert_eq!(max(&data), 3.0);
    }
}
