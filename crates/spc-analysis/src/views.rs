//! Aggregation views over one inspection table.
//!
//! Each view runs the extractor, then the chart/capability/violation
//! stages, and returns a serializable result for the caller layer:
//!
//! - [`batch_analysis`]: full diagnostics for one named series
//!   (Individual-X/MR) or for the average of all series (Xbar-R)
//! - [`cavity_summary`]: one capability row per series, for
//!   cross-series comparison
//! - [`group_summary`]: per-row descriptive aggregates, no control
//!   limits

use serde::Serialize;
use tracing::{debug, instrument};

use spc_capability::Capability;
use spc_charts::{individuals, xbar_r, ImrLimits, IndividualsStats, XbarRLimits, XbarRStats};
use spc_core::{stats, BatchRange, DataTable, Error, Result, SpecLimits};
use spc_rules::{detect, messages, Violation};

use crate::distribution::{self, Distribution};
use crate::extract::{extract_aggregate, extract_series, SeriesMatcher};

/// Chart payload for a single-series analysis.
#[derive(Debug, Clone, Serialize)]
pub struct SeriesData {
    /// The column name actually matched.
    pub cavity_actual_name: String,
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    /// Moving-range chart series.
    pub mr_values: Vec<f64>,
    /// Pairwise `"a-b"` labels for the moving-range chart.
    pub mr_labels: Vec<String>,
}

/// Chart payload for the all-series-averaged analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AggregateData {
    pub cavity_actual_name: String,
    pub labels: Vec<String>,
    /// Per-batch averages across series (the Xbar series).
    pub values: Vec<f64>,
    pub mr_values: Vec<f64>,
    pub mr_labels: Vec<String>,
    /// Per-batch range across series (the R series).
    pub r_values: Vec<f64>,
    pub r_labels: Vec<String>,
}

/// Full single-series diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct IndividualsAnalysis {
    pub stats: IndividualsStats,
    pub control_limits: ImrLimits,
    pub capability: Capability,
    /// Flat display messages, parallel to `violations_detail`.
    pub violations: Vec<String>,
    pub violations_detail: Vec<Violation>,
    pub distribution: Distribution,
    pub data: SeriesData,
    pub specs: SpecLimits,
}

/// Violations for the two charts of an Xbar-R analysis.
#[derive(Debug, Clone, Serialize)]
pub struct XbarRViolations {
    pub xbar_violations: Vec<Violation>,
    pub r_violations: Vec<Violation>,
}

/// Full subgroup-aggregated diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct XbarRAnalysis {
    pub stats: XbarRStats,
    pub control_limits: XbarRLimits,
    pub capability: Capability,
    pub violations: XbarRViolations,
    pub data: AggregateData,
    pub specs: SpecLimits,
}

/// Result of [`batch_analysis`]: the stats/limits shapes differ between
/// the two chart modes, so the result is an enum over them.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum BatchAnalysis {
    Individuals(Box<IndividualsAnalysis>),
    XbarR(Box<XbarRAnalysis>),
}

/// One series' capability row in the cross-series summary.
#[derive(Debug, Clone, Serialize)]
pub struct CavityCapability {
    pub cavity: String,
    pub mean: f64,
    pub cpk: f64,
    pub ppk: f64,
    pub std_within: f64,
    pub std_overall: f64,
}

/// Per-series capability comparison.
#[derive(Debug, Clone, Serialize)]
pub struct CavitySummary {
    pub cavities: Vec<CavityCapability>,
    pub specs: SpecLimits,
}

/// One batch row's descriptive aggregates.
#[derive(Debug, Clone, Serialize)]
pub struct GroupRow {
    pub batch: String,
    pub avg: f64,
    pub max: f64,
    pub min: f64,
    pub range: f64,
    pub n: usize,
}

/// Per-row group summary, purely descriptive.
#[derive(Debug, Clone, Serialize)]
pub struct GroupSummary {
    pub groups: Vec<GroupRow>,
    pub specs: SpecLimits,
}

/// Analyze one batch sample.
///
/// With a series name, runs the Individual-X/Moving-Range pipeline over
/// that column. Without one, aggregates every series column per row and
/// runs the Xbar-R pipeline with the subgroup size estimated from the
/// series column count.
#[instrument(skip(table, specs, matcher))]
pub fn batch_analysis(
    table: &DataTable,
    specs: &SpecLimits,
    matcher: &SeriesMatcher,
    series: Option<&str>,
    range: BatchRange,
) -> Result<BatchAnalysis> {
    match series {
        Some(name) => single_series_analysis(table, specs, matcher, name, range)
            .map(|a| BatchAnalysis::Individuals(Box::new(a))),
        None => averaged_analysis(table, specs, matcher, range)
            .map(|a| BatchAnalysis::XbarR(Box::new(a))),
    }
}

fn single_series_analysis(
    table: &DataTable,
    specs: &SpecLimits,
    matcher: &SeriesMatcher,
    name: &str,
    range: BatchRange,
) -> Result<IndividualsAnalysis> {
    let sample = extract_series(table, matcher, name, range)?;
    let chart = individuals::analyze(&sample.values)?;

    let capability = Capability::compute(
        chart.stats.mean,
        chart.stats.within_std,
        chart.stats.overall_std,
        specs,
    );
    let violations_detail = detect(
        &sample.values,
        chart.limits.cl_x,
        chart.limits.ucl_x,
        chart.limits.lcl_x,
        chart.stats.within_std,
    );
    let distribution =
        distribution::summarize(&sample.values, chart.stats.mean, chart.stats.overall_std);

    debug!(
        series = %sample.name,
        n = chart.stats.count,
        violations = violations_detail.len(),
        "single-series analysis complete"
    );

    Ok(IndividualsAnalysis {
        violations: messages(&violations_detail),
        violations_detail,
        capability,
        distribution,
        data: SeriesData {
            cavity_actual_name: sample.name,
            mr_values: stats::moving_ranges(&sample.values),
            mr_labels: pair_labels(&sample.labels),
            labels: sample.labels,
            values: sample.values,
        },
        stats: chart.stats,
        control_limits: chart.limits,
        specs: *specs,
    })
}

fn averaged_analysis(
    table: &DataTable,
    specs: &SpecLimits,
    matcher: &SeriesMatcher,
    range: BatchRange,
) -> Result<XbarRAnalysis> {
    let sample = extract_aggregate(table, matcher, range)?;
    let chart = xbar_r::analyze(&sample.means, &sample.spreads, sample.subgroup_size)?;

    let capability = Capability::compute(
        chart.stats.xbar_mean,
        chart.stats.within_std,
        chart.stats.xbar_overall_std,
        specs,
    );
    let xbar_violations = detect(
        &sample.means,
        chart.limits.cl_xbar,
        chart.limits.ucl_xbar,
        chart.limits.lcl_xbar,
        chart.stats.xbar_overall_std,
    );
    let r_violations = detect(
        &sample.spreads,
        chart.limits.cl_r,
        chart.limits.ucl_r,
        chart.limits.lcl_r,
        chart.stats.r_overall_std,
    );

    debug!(
        subgroups = chart.stats.xbar_count,
        subgroup_size = chart.constants.subgroup_size,
        "averaged analysis complete"
    );

    Ok(XbarRAnalysis {
        capability,
        violations: XbarRViolations {
            xbar_violations,
            r_violations,
        },
        data: AggregateData {
            cavity_actual_name: "Average of All Cavities".to_string(),
            mr_values: stats::moving_ranges(&sample.means),
            mr_labels: pair_labels(&sample.labels),
            r_values: sample.spreads,
            r_labels: sample.labels.clone(),
            labels: sample.labels,
            values: sample.means,
        },
        stats: chart.stats,
        control_limits: chart.limits,
        specs: *specs,
    })
}

/// Capability comparison across every series column.
///
/// A series that fails (too few coercible values, degenerate analysis) is
/// skipped and the loop continues; one bad cavity must not hide the rest.
#[instrument(skip(table, specs, matcher))]
pub fn cavity_summary(
    table: &DataTable,
    specs: &SpecLimits,
    matcher: &SeriesMatcher,
    range: BatchRange,
) -> Result<CavitySummary> {
    let cols = matcher.series_columns(table);
    let rows = range.slice(&table.rows);
    if rows.is_empty() {
        return Err(Error::no_data());
    }

    let mut cavities = Vec::with_capacity(cols.len());
    for (idx, name) in cols {
        let values: Vec<f64> = rows
            .iter()
            .filter_map(|row| row.get(idx).and_then(spc_core::Cell::as_f64))
            .collect();
        let chart = match individuals::analyze(&values) {
            Ok(chart) => chart,
            Err(err) => {
                debug!(series = name, %err, "skipping series in capability summary");
                continue;
            }
        };
        let capability = Capability::compute(
            chart.stats.mean,
            chart.stats.within_std,
            chart.stats.overall_std,
            specs,
        );
        cavities.push(CavityCapability {
            cavity: name.to_string(),
            mean: chart.stats.mean,
            cpk: capability.cpk,
            ppk: capability.ppk,
            std_within: chart.stats.within_std,
            std_overall: chart.stats.overall_std,
        });
    }

    Ok(CavitySummary {
        cavities,
        specs: *specs,
    })
}

/// Per-row descriptive aggregates across series columns.
#[instrument(skip(table, specs, matcher))]
pub fn group_summary(
    table: &DataTable,
    specs: &SpecLimits,
    matcher: &SeriesMatcher,
    range: BatchRange,
) -> Result<GroupSummary> {
    let cols = matcher.series_columns(table);
    let rows = range.slice(&table.rows);
    if rows.is_empty() {
        return Err(Error::no_data());
    }

    let mut groups = Vec::new();
    for row in rows {
        let values: Vec<f64> = cols
            .iter()
            .filter_map(|&(idx, _)| row.get(idx).and_then(spc_core::Cell::as_f64))
            .collect();
        if values.is_empty() {
            continue;
        }
        let min = stats::min(&values);
        let max = stats::max(&values);
        groups.push(GroupRow {
            batch: row
                .first()
                .map(spc_core::Cell::as_label)
                .unwrap_or_else(|| "Unknown".to_string()),
            avg: stats::mean(&values),
            max,
            min,
            range: max - min,
            n: values.len(),
        });
    }

    Ok(GroupSummary {
        groups,
        specs: *specs,
    })
}

/// Pairwise `"a-b"` labels for a moving-range or similar derived series.
fn pair_labels(labels: &[String]) -> Vec<String> {
    if labels.len() > 1 {
        labels
            .windows(2)
            .map(|w| format!("{}-{}", w[0], w[1]))
            .collect()
    } else {
        labels.to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spc_core::Cell;

    fn row(label: &str, values: &[Option<f64>]) -> Vec<Cell> {
        let mut cells = vec![Cell::Text(label.to_string())];
        cells.extend(values.iter().map(|v| match v {
            Some(n) => Cell::Number(*n),
            None => Cell::Empty,
        }));
        cells
    }

    fn table(values: &[(&str, [Option<f64>; 3])]) -> DataTable {
        DataTable {
            columns: vec![
                "Batch".into(),
                "Cav-A".into(),
                "Cav-B".into(),
                "Cav-C".into(),
            ],
            spec_row: vec![
                Cell::Text("SPEC".into()),
                Cell::Number(10.0),
                Cell::Number(10.5),
                Cell::Number(9.5),
            ],
            rows: values.iter().map(|(l, v)| row(l, v)).collect(),
        }
    }

    fn specs() -> SpecLimits {
        SpecLimits {
            target: 10.0,
            usl: 10.5,
            lsl: 9.5,
        }
    }

    fn matcher() -> SeriesMatcher {
        SeriesMatcher::new("Cav")
    }

    fn sample_table() -> DataTable {
        table(&[
            ("B1", [Some(10.0), Some(10.2), Some(9.9)]),
            ("B2", [Some(10.1), Some(10.0), Some(10.0)]),
            ("B3", [Some(9.9), Some(10.1), Some(10.1)]),
            ("B4", [Some(10.0), Some(9.95), Some(10.05)]),
        ])
    }

    #[test]
    fn test_single_series_mode() {
        let t = sample_table();
        let result =
            batch_analysis(&t, &specs(), &matcher(), Some("Cav-A"), BatchRange::all()).unwrap();
        let a = match result {
            BatchAnalysis::Individuals(a) => a,
            BatchAnalysis::XbarR(_) => panic!("expected individuals mode"),
        };
        assert_eq!(a.data.cavity_actual_name, "Cav-A");
        assert_eq!(a.stats.count, 4);
        assert_eq!(a.data.mr_values.len(), 3);
        assert_eq!(a.data.mr_labels, vec!["B1-B2", "B2-B3", "B3-B4"]);
        assert_eq!(a.violations.len(), a.violations_detail.len());
    }

    #[test]
    fn test_averaged_mode_uses_xbar_r() {
        let t = sample_table();
        let result = batch_analysis(&t, &specs(), &matcher(), None, BatchRange::all()).unwrap();
        let a = match result {
            BatchAnalysis::XbarR(a) => a,
            BatchAnalysis::Individuals(_) => panic!("expected xbar-r mode"),
        };
        assert_eq!(a.data.cavity_actual_name, "Average of All Cavities");
        assert_eq!(a.stats.xbar_count, 4);
        assert_eq!(a.data.r_values.len(), 4);
        assert_eq!(a.data.r_labels, a.data.labels);
    }

    #[test]
    fn test_missing_series_is_not_found() {
        let t = sample_table();
        let err = batch_analysis(&t, &specs(), &matcher(), Some("Cav-Z"), BatchRange::all())
            .unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
    }

    #[test]
    fn test_undersized_range_is_insufficient_data() {
        let t = sample_table();
        let err = batch_analysis(&t, &specs(), &matcher(), Some("Cav-A"), BatchRange::new(1, 1))
            .unwrap_err();
        assert!(matches!(err, Error::InsufficientData { .. }));
    }

    #[test]
    fn test_cavity_summary_skips_bad_series() {
        let t = table(&[
            ("B1", [Some(10.0), None, Some(9.9)]),
            ("B2", [Some(10.1), None, Some(10.0)]),
            ("B3", [Some(9.9), Some(10.1), Some(10.1)]),
        ]);
        let summary = cavity_summary(&t, &specs(), &matcher(), BatchRange::all()).unwrap();
        // Cav-B has a single value and is skipped; the others survive
        assert_eq!(summary.cavities.len(), 2);
        assert_eq!(summary.cavities[0].cavity, "Cav-A");
        assert_eq!(summary.cavities[1].cavity, "Cav-C");
    }

    #[test]
    fn test_group_summary_rows() {
        let t = sample_table();
        let summary = group_summary(&t, &specs(), &matcher(), BatchRange::all()).unwrap();
        assert_eq!(summary.groups.len(), 4);
        let first = &summary.groups[0];
        assert_eq!(first.batch, "B1");
        assert_eq!(first.n, 3);
        assert!((first.avg - (10.0 + 10.2 + 9.9) / 3.0).abs() < 1e-12);
        assert!((first.range - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_group_summary_empty_range() {
        let t = table(&[]);
        let err = group_summary(&t, &specs(), &matcher(), BatchRange::all()).unwrap_err();
        assert!(matches!(err, Error::InsufficientData { .. }));
    }
}
