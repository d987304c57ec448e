//! Sample extraction from inspection tables.
//!
//! Turns a [`DataTable`] plus a series selection and batch range into a
//! clean ordered numeric sample. Rows whose cell fails numeric coercion
//! are dropped label-and-value together, so the two stay aligned.

use tracing::debug;

use spc_core::{BatchRange, Cell, DataTable, Error, Result};

/// Identifies which columns are measurement series ("cavity" columns)
/// versus metadata, by a naming marker.
///
/// The marker is injected configuration: the original sheets tag cavity
/// columns with a marker character in the header, and a caller replaces
/// the matcher wholesale to reconfigure.
#[derive(Debug, Clone)]
pub struct SeriesMatcher {
    marker: String,
}

impl SeriesMatcher {
    pub fn new(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }

    /// Whether a column name denotes a measurement series.
    pub fn is_series(&self, column: &str) -> bool {
        column.contains(&self.marker)
    }

    /// All series columns of a table, as `(column_index, name)` pairs.
    pub fn series_columns<'a>(&self, table: &'a DataTable) -> Vec<(usize, &'a str)> {
        table
            .columns
            .iter()
            .enumerate()
            .filter(|(_, name)| self.is_series(name))
            .map(|(i, name)| (i, name.as_str()))
            .collect()
    }
}

/// One extracted single-series sample.
#[derive(Debug, Clone)]
pub struct ExtractedSeries {
    /// The actual column name matched (may differ from the request when
    /// substring matching applied).
    pub name: String,
    /// Batch labels, aligned with `values`.
    pub labels: Vec<String>,
    /// Coerced measurements in batch order.
    pub values: Vec<f64>,
}

/// Per-row aggregates across all series columns.
#[derive(Debug, Clone)]
pub struct AggregateSample {
    /// Batch labels, aligned with `means`/`spreads`.
    pub labels: Vec<String>,
    /// Per-row arithmetic mean across series.
    pub means: Vec<f64>,
    /// Per-row `max - min` across series (the R-chart input).
    pub spreads: Vec<f64>,
    /// Estimated subgroup size: the series column count, clamped to
    /// [2, 32]. A heuristic, not a measured true subgroup size.
    pub subgroup_size: usize,
}

/// Extract one named series.
///
/// The name is matched exactly first, then as a substring of columns the
/// matcher accepts as series. Rows failing coercion are dropped in place.
///
/// # Errors
///
/// `NotFound` when no column matches; `InsufficientData` when the range
/// selects no rows or no row coerces.
pub fn extract_series(
    table: &DataTable,
    matcher: &SeriesMatcher,
    name: &str,
    range: BatchRange,
) -> Result<ExtractedSeries> {
    let col = table
        .columns
        .iter()
        .position(|c| c == name || (c.contains(name) && matcher.is_series(c)))
        .ok_or_else(|| Error::series_not_found(name, &table.columns))?;

    let rows = range.slice(&table.rows);
    if rows.is_empty() {
        return Err(Error::no_data());
    }

    let mut labels = Vec::with_capacity(rows.len());
    let mut values = Vec::with_capacity(rows.len());
    for row in rows {
        if let Some(v) = row.get(col).and_then(Cell::as_f64) {
            labels.push(row.first().map(Cell::as_label).unwrap_or_else(|| "Unknown".into()));
            values.push(v);
        }
    }
    debug!(
        series = %table.columns[col],
        kept = values.len(),
        dropped = rows.len() - values.len(),
        "extracted series"
    );
    if values.is_empty() {
        return Err(Error::no_data());
    }

    Ok(ExtractedSeries {
        name: table.columns[col].clone(),
        labels,
        values,
    })
}

/// Extract per-row aggregates across all series columns.
///
/// Each row contributes the mean and `max - min` of its coercible series
/// values; rows with none are dropped.
///
/// # Errors
///
/// `NotFound` when the table has no series columns; `InsufficientData`
/// when the range selects no rows or no row has a coercible value.
pub fn extract_aggregate(
    table: &DataTable,
    matcher: &SeriesMatcher,
    range: BatchRange,
) -> Result<AggregateSample> {
    let cols = matcher.series_columns(table);
    if cols.is_empty() {
        return Err(Error::NotFound(
            "no cavity series columns found in the data".to_string(),
        ));
    }
    let subgroup_size = cols.len().clamp(2, 32);

    let rows = range.slice(&table.rows);
    if rows.is_empty() {
        return Err(Error::no_data());
    }

    let mut labels = Vec::new();
    let mut means = Vec::new();
    let mut spreads = Vec::new();
    for row in rows {
        let row_values: Vec<f64> = cols
            .iter()
            .filter_map(|&(i, _)| row.get(i).and_then(Cell::as_f64))
            .collect();
        if row_values.is_empty() {
            continue;
        }
        let sum: f64 = row_values.iter().sum();
        let lo = row_values.iter().copied().fold(f64::INFINITY, f64::min);
        let hi = row_values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        labels.push(row.first().map(Cell::as_label).unwrap_or_else(|| "Unknown".into()));
        means.push(sum / row_values.len() as f64);
        spreads.push(hi - lo);
    }
    debug!(
        series = cols.len(),
        rows = means.len(),
        subgroup_size,
        "extracted aggregate sample"
    );
    if means.is_empty() {
        return Err(Error::no_data());
    }

    Ok(AggregateSample {
        labels,
        means,
        spreads,
        subgroup_size,
    })
}
