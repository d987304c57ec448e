//! Histogram and fitted-curve data for distribution plots.
//!
//! The histogram uses 15 equal-width bins over `[min, max]` with the top
//! edge inclusive. The fitted curve is the normal PDF over `mean ± 4σ`,
//! scaled by `n · bin_width` so it overlays the histogram's raw counts
//! rather than a density.

use serde::{Deserialize, Serialize};
use statrs::distribution::{Continuous, Normal};

use spc_core::{clean, stats, Sanitize};

/// Number of histogram bins.
pub const NUM_BINS: usize = 15;

/// Number of points on the fitted curve.
pub const CURVE_POINTS: usize = 100;

/// Histogram bin centers and counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Histogram {
    pub bin_centers: Vec<f64>,
    pub counts: Vec<usize>,
}

/// Fitted normal curve, scaled to histogram counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Curve {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

/// Distribution plot data: histogram plus matching fitted curve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Distribution {
    pub histogram: Histogram,
    pub curve: Curve,
}

impl Sanitize for Distribution {
    fn sanitize(mut self) -> Self {
        self.histogram.bin_centers = self.histogram.bin_centers.sanitize();
        self.curve.x = self.curve.x.sanitize();
        self.curve.y = self.curve.y.sanitize();
        self
    }
}

/// Summarize a sample's distribution for plotting.
///
/// `mean` and `overall_std` are the chart engine's location and long-term
/// dispersion for the same sample. A zero-span sample (all values equal)
/// widens the histogram to a unit span centered on the value so bins stay
/// well-defined; a zero `overall_std` degenerates the curve to zeros at
/// the mean.
pub fn summarize(values: &[f64], mean: f64, overall_std: f64) -> Distribution {
    let (histogram, bin_width) = histogram(values);
    let curve = curve(mean, overall_std, values.len(), bin_width);
    Distribution { histogram, curve }.sanitize()
}

fn histogram(values: &[f64]) -> (Histogram, f64) {
    let mut lo = stats::min(values);
    let mut hi = stats::max(values);
    if hi - lo <= 0.0 {
        lo -= 0.5;
        hi += 0.5;
    }
    let width = (hi - lo) / NUM_BINS as f64;

    let mut counts = vec![0usize; NUM_BINS];
    for &v in values {
        let idx = (((v - lo) / width) as usize).min(NUM_BINS - 1);
        counts[idx] += 1;
    }
    let bin_centers = (0..NUM_BINS)
        .map(|i| lo + width * (i as f64 + 0.5))
        .collect();

    (
        Histogram {
            bin_centers,
            counts,
        },
        width,
    )
}

fn curve(mean: f64, overall_std: f64, sample_size: usize, bin_width: f64) -> Curve {
    let lo = mean - 4.0 * overall_std;
    let hi = mean + 4.0 * overall_std;
    let step = (hi - lo) / (CURVE_POINTS - 1) as f64;
    let x: Vec<f64> = (0..CURVE_POINTS).map(|i| lo + step * i as f64).collect();

    let scale = sample_size as f64 * bin_width;
    let y = match Normal::new(mean, overall_std) {
        Ok(normal) => x.iter().map(|&xi| clean(normal.pdf(xi) * scale)).collect(),
        // Degenerate dispersion: flat zero curve at the mean
        Err(_) => vec![0.0; CURVE_POINTS],
    };

    Curve { x, y }
}
