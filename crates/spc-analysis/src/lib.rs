//! Analysis layer: from inspection table to chart-ready results.
//!
//! This crate ties the lower layers together. [`extract`] pulls ordered
//! numeric samples out of a [`spc_core::DataTable`], [`distribution`]
//! summarizes a sample for histogram plotting, and [`views`] assembles
//! the full analysis results a report or API layer serializes directly:
//!
//! - [`views::batch_analysis`]: control chart + capability + violations
//!   for one series, or Xbar-R over the per-batch averages
//! - [`views::cavity_summary`]: capability comparison across series
//! - [`views::group_summary`]: per-batch descriptive aggregates
//!
//! All numeric outputs are sanitized at the boundary: NaN and infinity
//! never reach serialization.

pub mod distribution;
pub mod extract;
pub mod views;

pub use distribution::{Curve, Distribution, Histogram};
pub use extract::{extract_aggregate, extract_series, AggregateSample, ExtractedSeries, SeriesMatcher};
pub use views::{
    batch_analysis, cavity_summary, group_summary, BatchAnalysis, CavityCapability, CavitySummary,
    GroupRow, GroupSummary, IndividualsAnalysis, XbarRAnalysis, XbarRViolations,
};
