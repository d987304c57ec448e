//! Smoke tests through the `spc-stats` facade: the flattened re-exports
//! drive a full analysis and the result serializes as a flat payload.

use approx::assert_abs_diff_eq;

use spc_stats::{batch_analysis, BatchRange, Cell, DataTable, SeriesMatcher, SpecLimits};

fn inspection_table() -> DataTable {
    let values = [10.02, 9.98, 10.05, 10.0, 9.97, 10.03, 10.01, 9.99];
    DataTable {
        columns: vec!["Batch".into(), "Cav-1".into()],
        spec_row: vec![Cell::Text("SPEC".into()), Cell::Empty],
        rows: values
            .iter()
            .enumerate()
            .map(|(i, &v)| vec![Cell::Text(format!("B{}", i + 1)), Cell::Number(v)])
            .collect(),
    }
}

#[test]
fn test_facade_runs_full_analysis() {
    let table = inspection_table();
    let specs = SpecLimits {
        target: 10.0,
        usl: 10.15,
        lsl: 9.85,
    };
    let matcher = SeriesMatcher::new("Cav");

    let result = batch_analysis(&table, &specs, &matcher, Some("Cav-1"), BatchRange::all())
        .expect("analysis over a healthy sample");
    let a = match result {
        spc_stats::analysis::BatchAnalysis::Individuals(a) => a,
        spc_stats::analysis::BatchAnalysis::XbarR(_) => panic!("expected individuals mode"),
    };
    assert_eq!(a.stats.count, 8);
    assert_abs_diff_eq!(a.control_limits.cl_x, a.stats.mean, epsilon = 1e-12);
    assert_abs_diff_eq!(
        a.capability.cpk,
        a.capability.cpu.min(a.capability.cpl),
        epsilon = 1e-12
    );
}

#[test]
fn test_facade_result_serializes() {
    let table = inspection_table();
    let specs = SpecLimits {
        target: 10.0,
        usl: 10.15,
        lsl: 9.85,
    };
    let matcher = SeriesMatcher::new("Cav");

    let result =
        batch_analysis(&table, &specs, &matcher, Some("Cav-1"), BatchRange::all()).unwrap();
    let json = serde_json::to_value(&result).unwrap();
    // Untagged enum: the mode's fields land at the top level
    assert!(json.get("stats").is_some());
    assert!(json.get("capability").is_some());
    assert_eq!(json["data"]["cavity_actual_name"], "Cav-1");
}
