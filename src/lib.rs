//! Statistical process control diagnostics for multi-cavity inspection
//! data.
//!
//! This facade re-exports the workspace crates as modules:
//!
//! - [`core`]: data model, spec-limit resolution, sanitization, errors
//! - [`charts`]: Individual-X/MR and Xbar-R control chart engines
//! - [`capability`]: Cp/Cpk, Pp/Ppk, sigma level, DPMO
//! - [`rules`]: run-rule (pattern) violation detection
//! - [`analysis`]: extraction, distribution summaries, and the
//!   top-level analysis views
//!
//! Most callers only need [`analysis`]:
//!
//! ```
//! use spc_stats::analysis::{batch_analysis, SeriesMatcher};
//! use spc_stats::core::{BatchRange, Cell, DataTable, SpecLimits};
//!
//! let table = DataTable {
//!     columns: vec!["Batch".into(), "Cav-1".into(), "Cav-2".into()],
//!     spec_row: vec![Cell::Empty, Cell::Number(10.5), Cell::Number(9.5)],
//!     rows: (0..10)
//!         .map(|i| {
//!             let v = 10.0 + (i as f64) * 0.01;
//!             vec![Cell::Text(format!("B{i}")), Cell::Number(v), Cell::Number(v + 0.05)]
//!         })
//!         .collect(),
//! };
//! let specs = SpecLimits { target: 10.0, usl: 10.5, lsl: 9.5 };
//! let matcher = SeriesMatcher::new("Cav");
//!
//! let result = batch_analysis(&table, &specs, &matcher, Some("Cav-1"), BatchRange::all())?;
//! # let _ = result;
//! # Ok::<(), spc_stats::core::Error>(())
//! ```

pub use spc_analysis as analysis;
pub use spc_capability as capability;
pub use spc_charts as charts;
pub use spc_core as core;
pub use spc_rules as rules;

// The common entry points, flattened for convenience.
pub use spc_analysis::{batch_analysis, cavity_summary, group_summary, SeriesMatcher};
pub use spc_core::{BatchRange, Cell, DataTable, Error, Result, SpecLimits};
