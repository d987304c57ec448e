//! Sigma level and DPMO conversion.
//!
//! `sigma_level = 3 · cpk`; DPMO is the two-tailed standard normal tail
//! probability at that level, scaled to a million opportunities:
//!
//! ```text
//! DPMO = 2 · (1 − Φ(|sigma_level|)) · 1,000,000
//! ```

use statrs::distribution::{ContinuousCDF, Normal};

use spc_core::clean;

/// Defects per million opportunities for a sigma level.
///
/// Compute failures (a degenerate normal, non-finite input) default to
/// 0.0 rather than propagating.
pub fn dpmo(sigma_level: f64) -> f64 {
    if !sigma_level.is_finite() {
        return 0.0;
    }
    match Normal::new(0.0, 1.0) {
        Ok(normal) => clean(2.0 * (1.0 - normal.cdf(sigma_level.abs())) * 1_000_000.0),
        Err(_) => 0.0,
    }
}
