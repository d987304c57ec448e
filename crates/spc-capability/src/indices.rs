//! Process capability indices.
//!
//! Short-term indices (Cp, Cpk) use the within-subgroup dispersion
//! estimate; long-term indices (Pp, Ppk) use overall dispersion. Every
//! ratio degrades to 0 when its divisor (a dispersion estimate or the
//! tolerance) is not strictly positive, so degenerate samples produce a
//! well-defined all-zero result instead of NaN or infinity.

use serde::{Deserialize, Serialize};
use spc_core::{Sanitize, SpecLimits};

use crate::sigma::dpmo;

/// Computed capability metrics for one sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Capability {
    /// Cp = tolerance / (6 · within_std).
    pub cp: f64,
    /// Cpk = min(cpu, cpl).
    pub cpk: f64,
    /// Cpu = (USL − mean) / (3 · within_std).
    pub cpu: f64,
    /// Cpl = (mean − LSL) / (3 · within_std).
    pub cpl: f64,
    /// Pp = tolerance / (6 · overall_std).
    pub pp: f64,
    /// Ppk = min(ppu, ppl).
    pub ppk: f64,
    /// Ppu = (USL − mean) / (3 · overall_std).
    pub ppu: f64,
    /// Ppl = (mean − LSL) / (3 · overall_std).
    pub ppl: f64,
    /// 3 · cpk.
    pub sigma_level: f64,
    /// Two-tailed normal tail probability at `|sigma_level|`, per million.
    pub dpmo: f64,
}

/// `num / denom`, or 0 when the divisor is not strictly positive.
fn ratio(num: f64, denom: f64) -> f64 {
    if denom > 0.0 {
        num / denom
    } else {
        0.0
    }
}

/// Smaller of the two one-sided indices; 0 if either is not a number.
fn centered_min(upper: f64, lower: f64) -> f64 {
    if upper.is_nan() || lower.is_nan() {
        0.0
    } else {
        upper.min(lower)
    }
}

impl Capability {
    /// Compute all indices from location, dispersion, and spec limits.
    pub fn compute(mean: f64, within_std: f64, overall_std: f64, specs: &SpecLimits) -> Self {
        let tolerance = specs.tolerance();

        let cp = ratio(tolerance, 6.0 * within_std);
        let cpu = ratio(specs.usl - mean, 3.0 * within_std);
        let cpl = ratio(mean - specs.lsl, 3.0 * within_std);
        let cpk = centered_min(cpu, cpl);

        let pp = ratio(tolerance, 6.0 * overall_std);
        let ppu = ratio(specs.usl - mean, 3.0 * overall_std);
        let ppl = ratio(mean - specs.lsl, 3.0 * overall_std);
        let ppk = centered_min(ppu, ppl);

        let sigma_level = cpk * 3.0;

        Self {
            cp,
            cpk,
            cpu,
            cpl,
            pp,
            ppk,
            ppu,
            ppl,
            sigma_level,
            dpmo: dpmo(sigma_level),
        }
        .sanitize()
    }
}

impl Sanitize for Capability {
    fn sanitize(mut self) -> Self {
        self.cp = self.cp.sanitize();
        self.cpk = self.cpk.sanitize();
        self.cpu = self.cpu.sanitize();
        self.cpl = self.cpl.sanitize();
        self.pp = self.pp.sanitize();
        self.ppk = self.ppk.sanitize();
        self.ppu = self.ppu.sanitize();
        self.ppl = self.ppl.sanitize();
        self.sigma_level = self.sigma_level.sanitize();
        self.dpmo = self.dpmo.sanitize();
        self
    }
}
