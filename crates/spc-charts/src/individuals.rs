//! Individual-X / Moving-Range chart engine.
//!
//! For a single measurement series the within-process dispersion is
//! estimated from the mean moving range: `within_std = mr_mean / d2(2)`.
//! The Individual-X limits are `mean ± 2.66 · within_std`; the MR chart's
//! upper limit is `3.267 · mr_mean` with LCL pinned at 0 (D3 = 0 at n = 2).

use serde::{Deserialize, Serialize};
use spc_core::{stats, Error, Result, Sanitize};

use crate::constants::D2_INDIVIDUALS;

/// Descriptive statistics for an Individual-X chart.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndividualsStats {
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub range: f64,
    pub count: usize,
    /// Short-term dispersion, `mr_mean / d2(2)`.
    pub within_std: f64,
    /// Long-term dispersion, Bessel-corrected sample std.
    pub overall_std: f64,
    /// Mean moving range; 0 when fewer than two points produce ranges.
    pub mr_mean: f64,
}

impl Sanitize for IndividualsStats {
    fn sanitize(mut self) -> Self {
        self.mean = self.mean.sanitize();
        self.max = self.max.sanitize();
        self.min = self.min.sanitize();
        self.range = self.range.sanitize();
        self.within_std = self.within_std.sanitize();
        self.overall_std = self.overall_std.sanitize();
        self.mr_mean = self.mr_mean.sanitize();
        self
    }
}

/// Control limits for the Individual-X and Moving-Range charts.
///
/// `cl_x` is always the sample mean; the X limits are symmetric about it.
/// The MR limits are one-sided-biased by the asymmetric constants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImrLimits {
    pub ucl_x: f64,
    pub lcl_x: f64,
    pub cl_x: f64,
    pub ucl_mr: f64,
    pub cl_mr: f64,
    pub lcl_mr: f64,
}

impl Sanitize for ImrLimits {
    fn sanitize(mut self) -> Self {
        self.ucl_x = self.ucl_x.sanitize();
        self.lcl_x = self.lcl_x.sanitize();
        self.cl_x = self.cl_x.sanitize();
        self.ucl_mr = self.ucl_mr.sanitize();
        self.cl_mr = self.cl_mr.sanitize();
        self.lcl_mr = self.lcl_mr.sanitize();
        self
    }
}

/// Result of Individual-X / Moving-Range analysis.
#[derive(Debug, Clone, Serialize)]
pub struct IndividualsChart {
    pub stats: IndividualsStats,
    pub limits: ImrLimits,
}

/// Compute Individual-X / Moving-Range statistics and control limits.
///
/// # Errors
///
/// `InsufficientData` when the sample holds fewer than two points.
pub fn analyze(values: &[f64]) -> Result<IndividualsChart> {
    if values.len() < 2 {
        return Err(Error::too_few_samples(values.len()));
    }

    let mean = stats::mean(values);
    let min = stats::min(values);
    let max = stats::max(values);
    let overall_std = stats::sample_std(values);

    let mr = stats::moving_ranges(values);
    let mr_mean = if mr.is_empty() { 0.0 } else { stats::mean(&mr) };
    let within_std = mr_mean / D2_INDIVIDUALS;

    let stats = IndividualsStats {
        mean,
        max,
        min,
        range: max - min,
        count: values.len(),
        within_std,
        overall_std,
        mr_mean,
    }
    .sanitize();

    let limits = ImrLimits {
        ucl_x: mean + 2.66 * within_std,
        lcl_x: mean - 2.66 * within_std,
        cl_x: mean,
        ucl_mr: 3.267 * mr_mean,
        cl_mr: mr_mean,
        lcl_mr: 0.0,
    }
    .sanitize();

    Ok(IndividualsChart { stats, limits })
}
