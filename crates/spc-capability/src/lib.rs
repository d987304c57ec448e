//! Process capability analysis
//!
//! Computes Cp/Cpk (short-term, within-subgroup dispersion) and Pp/Ppk
//! (long-term, overall dispersion) from a chart engine's estimates plus
//! the resolved spec limits, along with the derived sigma level and DPMO.

mod indices;
mod sigma;

pub use indices::Capability;
pub use sigma::dpmo;
