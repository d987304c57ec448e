//! Control chart engines
//!
//! Two chart modes over ordered batch samples:
//!
//! - [`individuals`]: Individual-X / Moving-Range for a single series
//! - [`xbar_r`]: Xbar-R for subgroup-aggregated data (one subgroup per
//!   batch row across parallel series)
//!
//! Constants (A2, D3, D4, d2) come from explicit lookup tables in
//! [`constants`], keyed by subgroup size.

pub mod constants;
pub mod individuals;
pub mod xbar_r;

pub use constants::{d2, XbarRConstants, D2_INDIVIDUALS};
pub use individuals::{ImrLimits, IndividualsChart, IndividualsStats};
pub use xbar_r::{XbarRChart, XbarRLimits, XbarRStats};
