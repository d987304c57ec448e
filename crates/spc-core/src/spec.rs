//! Specification-limit resolution.
//!
//! Spec limits (target, USL, LSL) are manually entered cells and must be
//! echoed back in reports at exactly the precision the author intended.
//! The intended precision is inferred from the value's textual form:
//! trailing zeros in the fractional part are presentation, not precision,
//! so `"0.250"` resolves to two decimal places and `"5"` to an integer.

use serde::{Deserialize, Serialize};

use crate::table::Cell;

/// Resolved spec limits for one inspection item.
///
/// `usl > lsl` is expected but not enforced; a non-positive tolerance
/// degrades capability ratios to 0 downstream rather than failing here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpecLimits {
    /// Nominal target value.
    pub target: f64,
    /// Upper specification limit.
    pub usl: f64,
    /// Lower specification limit.
    pub lsl: f64,
}

impl SpecLimits {
    /// Tolerance band `usl - lsl`; may be zero or negative.
    pub fn tolerance(&self) -> f64 {
        self.usl - self.lsl
    }

    /// Read spec limits from a spec row.
    ///
    /// Target, USL, and LSL sit at fixed positions 1, 2, and 3 (the sheet
    /// layout puts them in the first data row, next to the label column).
    /// Missing or non-numeric cells fall back to 0.0.
    pub fn from_spec_row(row: &[Cell]) -> Self {
        let at = |i: usize| row.get(i).map_or(0.0, |c| resolve_spec(c, 0.0));
        Self {
            target: at(1),
            usl: at(2),
            lsl: at(3),
        }
    }
}

/// Number of authoritative decimal places in a value's textual form.
///
/// Trailing zeros in the fractional part are stripped first; a fraction
/// that was all zeros (or the absence of a decimal point) counts as zero
/// places, i.e. an integer.
pub fn decimal_places(text: &str) -> usize {
    match text.split_once('.') {
        Some((_, frac)) => frac.trim_end_matches('0').len(),
        None => 0,
    }
}

/// Resolve a raw cell to a spec value rounded to its authoritative
/// precision.
///
/// Fails soft: blanks and non-numeric text return `default`.
pub fn resolve_spec(cell: &Cell, default: f64) -> f64 {
    let text = match cell {
        Cell::Number(n) => format!("{n}"),
        Cell::Text(s) => s.trim().to_string(),
        Cell::Empty => return default,
    };
    let Some(value) = cell.as_f64() else {
        return default;
    };
    round_to(value, decimal_places(&text))
}

/// Round to `places` decimal places.
///
/// Exact ties round half away from zero (`f64::round`), not half to
/// even: a spec entered as "0.125" resolves to 0.13 at two places.
fn round_to(value: f64, places: usize) -> f64 {
    if places == 0 {
        return value.round();
    }
    let scale = 10f64.powi(places as i32);
    (value * scale).round() / scale
}
