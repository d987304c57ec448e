//! Xbar-R chart engine for subgroup-aggregated data.
//!
//! One subgroup per batch row: the caller supplies the sequence of subgroup
//! means and subgroup ranges. Limits come from the [`XbarRConstants`] table
//! for the given subgroup size; `within_std = r_bar / d2(n)`, while
//! `overall_std` is the Bessel-corrected std of the subgroup means
//! themselves (between-subgroup dispersion of averages, a deliberate
//! simplification carried over from the reference reports).

use serde::{Deserialize, Serialize};
use spc_core::{stats, Error, Result, Sanitize};

use crate::constants::XbarRConstants;

/// Descriptive statistics for the Xbar and R charts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XbarRStats {
    /// Grand mean (mean of subgroup means).
    pub xbar_mean: f64,
    pub xbar_max: f64,
    pub xbar_min: f64,
    pub xbar_count: usize,
    /// Mean subgroup range.
    pub r_mean: f64,
    pub r_max: f64,
    pub r_min: f64,
    pub r_count: usize,
    /// Dispersion of the subgroup means.
    pub xbar_overall_std: f64,
    /// Dispersion of the subgroup ranges.
    pub r_overall_std: f64,
    /// Short-term dispersion, `r_bar / d2(n)`.
    pub within_std: f64,
}

impl Sanitize for XbarRStats {
    fn sanitize(mut self) -> Self {
        self.xbar_mean = self.xbar_mean.sanitize();
        self.xbar_max = self.xbar_max.sanitize();
        self.xbar_min = self.xbar_min.sanitize();
        self.r_mean = self.r_mean.sanitize();
        self.r_max = self.r_max.sanitize();
        self.r_min = self.r_min.sanitize();
        self.xbar_overall_std = self.xbar_overall_std.sanitize();
        self.r_overall_std = self.r_overall_std.sanitize();
        self.within_std = self.within_std.sanitize();
        self
    }
}

/// Control limits for the Xbar and R charts.
///
/// The Xbar limits are symmetric about the grand mean; the R limits are
/// not (D3/D4 are asymmetric).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XbarRLimits {
    pub ucl_xbar: f64,
    pub lcl_xbar: f64,
    pub cl_xbar: f64,
    pub ucl_r: f64,
    pub lcl_r: f64,
    pub cl_r: f64,
}

impl Sanitize for XbarRLimits {
    fn sanitize(mut self) -> Self {
        self.ucl_xbar = self.ucl_xbar.sanitize();
        self.lcl_xbar = self.lcl_xbar.sanitize();
        self.cl_xbar = self.cl_xbar.sanitize();
        self.ucl_r = self.ucl_r.sanitize();
        self.lcl_r = self.lcl_r.sanitize();
        self.cl_r = self.cl_r.sanitize();
        self
    }
}

/// Result of Xbar-R analysis.
#[derive(Debug, Clone, Serialize)]
pub struct XbarRChart {
    pub stats: XbarRStats,
    pub limits: XbarRLimits,
    /// The constants actually used, including the effective subgroup size.
    #[serde(skip)]
    pub constants: XbarRConstants,
}

/// Compute Xbar-R statistics and control limits.
///
/// `subgroup_size` is usually the caller's estimate from the number of
/// parallel series columns; out-of-range sizes fall back to n = 5 inside
/// the constants lookup.
///
/// # Errors
///
/// `InsufficientData` when fewer than two subgroup means or ranges are
/// supplied.
pub fn analyze(
    xbar_values: &[f64],
    r_values: &[f64],
    subgroup_size: usize,
) -> Result<XbarRChart> {
    if xbar_values.len() < 2 || r_values.len() < 2 {
        return Err(Error::too_few_samples(xbar_values.len().min(r_values.len())));
    }

    let constants = XbarRConstants::for_subgroup(subgroup_size);

    let xbar_bar = stats::mean(xbar_values);
    let r_bar = stats::mean(r_values);
    let within_std = if constants.d2 > 0.0 {
        r_bar / constants.d2
    } else {
        0.0
    };

    let stats = XbarRStats {
        xbar_mean: xbar_bar,
        xbar_max: stats::max(xbar_values),
        xbar_min: stats::min(xbar_values),
        xbar_count: xbar_values.len(),
        r_mean: r_bar,
        r_max: stats::max(r_values),
        r_min: stats::min(r_values),
        r_count: r_values.len(),
        xbar_overall_std: stats::sample_std(xbar_values),
        r_overall_std: stats::sample_std(r_values),
        within_std,
    }
    .sanitize();

    let limits = XbarRLimits {
        ucl_xbar: xbar_bar + constants.a2 * r_bar,
        lcl_xbar: xbar_bar - constants.a2 * r_bar,
        cl_xbar: xbar_bar,
        ucl_r: constants.d4 * r_bar,
        lcl_r: constants.d3 * r_bar,
        cl_r: r_bar,
    }
    .sanitize();

    Ok(XbarRChart {
        stats,
        limits,
        constants,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    const XBAR: [f64; 5] = [10.0, 10.2, 9.8, 10.1, 9.9];
    const R: [f64; 5] = [0.5, 0.4, 0.6, 0.5, 0.5];

    #[test]
    fn test_rejects_undersized_input() {
        assert!(matches!(
            analyze(&[10.0], &[0.5], 5),
            Err(Error::InsufficientData { .. })
        ));
        assert!(matches!(
            analyze(&XBAR, &[0.5], 5),
            Err(Error::InsufficientData { .. })
        ));
    }

    #[test]
    fn test_grand_mean_and_r_bar() {
        let chart = analyze(&XBAR, &R, 5).unwrap();
        assert_abs_diff_eq!(chart.stats.xbar_mean, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(chart.stats.r_mean, 0.5, epsilon = 1e-12);
        assert_eq!(chart.stats.xbar_count, 5);
        assert_eq!(chart.stats.r_count, 5);
    }

    #[test]
    fn test_limits_from_n5_constants() {
        let chart = analyze(&XBAR, &R, 5).unwrap();
        // A2 = 0.577, D3 = 0, D4 = 2.115 at n = 5
        assert_abs_diff_eq!(chart.limits.ucl_xbar, 10.0 + 0.577 * 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(chart.limits.lcl_xbar, 10.0 - 0.577 * 0.5, epsilon = 1e-12);
        assert_abs_diff_eq!(chart.limits.cl_xbar, 10.0, epsilon = 1e-12);
        assert_abs_diff_eq!(chart.limits.ucl_r, 2.115 * 0.5, epsilon = 1e-12);
        assert_eq!(chart.limits.lcl_r, 0.0);
        assert_abs_diff_eq!(chart.limits.cl_r, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_within_std_from_d2() {
        let chart = analyze(&XBAR, &R, 5).unwrap();
        assert_abs_diff_eq!(chart.stats.within_std, 0.5 / 2.326, epsilon = 1e-12);
    }

    #[test]
    fn test_xbar_limits_symmetric_about_grand_mean() {
        let chart = analyze(&XBAR, &R, 4).unwrap();
        let l = &chart.limits;
        assert_abs_diff_eq!(
            l.ucl_xbar - l.cl_xbar,
            l.cl_xbar - l.lcl_xbar,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_out_of_range_subgroup_falls_back_to_n5() {
        let chart = analyze(&XBAR, &R, 40).unwrap();
        assert_eq!(chart.constants.subgroup_size, 5);
        assert_abs_diff_eq!(chart.limits.ucl_xbar, 10.0 + 0.577 * 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_constant_subgroups_zero_dispersion() {
        let chart = analyze(&[7.0; 4], &[0.0; 4], 5).unwrap();
        assert_eq!(chart.stats.xbar_overall_std, 0.0);
        assert_eq!(chart.stats.within_std, 0.0);
        assert_abs_diff_eq!(chart.limits.ucl_xbar, 7.0);
        assert_abs_diff_eq!(chart.limits.lcl_xbar, 7.0);
        assert_eq!(chart.limits.ucl_r, 0.0);
    }
}
