//! Run-rule violation detection
//!
//! Applies four sequential pattern rules (Nelson rules 1-4) to an ordered
//! chart sample against its center line and control limits: points outside
//! the limits, one-sided runs, monotonic trends, and alternating patterns.

mod detector;
mod types;

pub use detector::detect;
pub use types::{messages, Rule, Violation};
