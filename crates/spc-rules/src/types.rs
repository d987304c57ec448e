//! Violation types for run-rule detection.

use serde::{Deserialize, Serialize};

/// The four pattern rules applied to every chart sample.
///
/// These are the first four of Nelson's tests for special causes
/// (Nelson, L.S. (1984), *Journal of Quality Technology* 16(4)).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rule {
    /// Rule 1: a point outside the control limits.
    OutsideLimits,
    /// Rule 2: 9 or more consecutive points on one side of the center line.
    RunOneSide,
    /// Rule 3: 6 or more consecutive strictly monotonic points.
    Trend,
    /// Rule 4: 14 or more points alternating in direction.
    Alternating,
}

impl Rule {
    /// Numeric rule id, 1..=4.
    pub fn id(&self) -> u8 {
        match self {
            Rule::OutsideLimits => 1,
            Rule::RunOneSide => 2,
            Rule::Trend => 3,
            Rule::Alternating => 4,
        }
    }

    /// Display label, "Rule 1" .. "Rule 4".
    pub fn label(&self) -> &'static str {
        match self {
            Rule::OutsideLimits => "Rule 1",
            Rule::RunOneSide => "Rule 2",
            Rule::Trend => "Rule 3",
            Rule::Alternating => "Rule 4",
        }
    }
}

/// A detected rule violation at one sample index.
///
/// A sample index may carry multiple violations, from different rules or
/// from the same run re-triggering as it slides forward.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Which rule fired.
    pub rule: Rule,
    /// 0-based sample index at which it fired.
    pub index: usize,
    /// Human-readable description (1-based point numbering for display).
    pub message: String,
}

/// Flat message list for display, parallel to the structured list.
pub fn messages(violations: &[Violation]) -> Vec<String> {
    violations.iter().map(|v| v.message.clone()).collect()
}
