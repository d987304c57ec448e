//! Core types for SPC analysis
//!
//! This crate provides the shared foundation for the spc-stats workspace:
//!
//! - **Error handling**: a unified [`Error`] type and [`Result`] alias
//! - **Tabular model**: [`Cell`], [`DataTable`], and [`BatchRange`] for
//!   already-materialized inspection data
//! - **Spec resolution**: precision-aware spec-limit parsing ([`SpecLimits`])
//! - **Sanitization**: the output-boundary NaN/Inf → 0.0 conversion
//! - **Statistics**: descriptive primitives used by the chart engines

mod error;
mod sanitize;
pub mod spec;
pub mod stats;
mod table;

pub use error::{Error, Result};
pub use sanitize::{clean, Sanitize};
pub use spec::{decimal_places, resolve_spec, SpecLimits};
pub use table::{BatchRange, Cell, DataTable};
