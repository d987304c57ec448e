//! Run-rule detection over an ordered chart sample.
//!
//! All four rules run independently over the full sample and their results
//! are concatenated in rule order, not deduplicated: a run that keeps
//! going past its trigger length re-fires at every subsequent point
//! (sliding re-trigger), and one index can carry violations from several
//! rules at once.

use crate::types::{Rule, Violation};

/// Apply rules 1-4 to a sample against its center line and control limits.
///
/// `sigma` is the dispersion estimate backing the limits and acts purely
/// as a guard: when it is not strictly positive the limits are
/// meaningless, so no violations are reported.
pub fn detect(values: &[f64], cl: f64, ucl: f64, lcl: f64, sigma: f64) -> Vec<Violation> {
    if !(sigma > 0.0) {
        return Vec::new();
    }

    let mut violations = Vec::new();
    check_outside_limits(values, ucl, lcl, &mut violations);
    check_run_one_side(values, cl, &mut violations);
    check_trend(values, &mut violations);
    check_alternating(values, &mut violations);
    violations
}

/// Rule 1: any point outside `[LCL, UCL]`, each flagged independently.
fn check_outside_limits(values: &[f64], ucl: f64, lcl: f64, out: &mut Vec<Violation>) {
    for (i, &v) in values.iter().enumerate() {
        if v > ucl || v < lcl {
            out.push(Violation {
                rule: Rule::OutsideLimits,
                index: i,
                message: format!(
                    "Rule 1: Point {} is outside control limits ({:.4})",
                    i + 1,
                    v
                ),
            });
        }
    }
}

/// Rule 2: 9 or more consecutive points strictly on one side of center.
///
/// A point exactly on the center line counts as neither side and resets
/// the run. Fires when the run first reaches 9 and keeps firing while it
/// continues.
fn check_run_one_side(values: &[f64], cl: f64, out: &mut Vec<Violation>) {
    let mut side = 0i8;
    let mut count = 0usize;
    for (i, &v) in values.iter().enumerate() {
        let current = if v > cl {
            1
        } else if v < cl {
            -1
        } else {
            0
        };
        if current != 0 {
            if current == side {
                count += 1;
            } else {
                side = current;
                count = 1;
            }
            if count >= 9 {
                out.push(Violation {
                    rule: Rule::RunOneSide,
                    index: i,
                    message: format!("Rule 2: 9 consecutive points on one side at point {}", i + 1),
                });
            }
        } else {
            count = 0;
            side = 0;
        }
    }
}

/// Rule 3: 6 or more consecutive strictly monotonic points.
///
/// A flat step resets the run; a direction change restarts the count at 2
/// (the two points forming the new step). Fires from the point where the
/// run reaches 6 and on every step while it continues.
fn check_trend(values: &[f64], out: &mut Vec<Violation>) {
    let mut trend = 0i8;
    let mut count = 1usize;
    for i in 1..values.len() {
        let current = if values[i] > values[i - 1] {
            1
        } else if values[i] < values[i - 1] {
            -1
        } else {
            0
        };
        if current != 0 {
            if current == trend {
                count += 1;
            } else {
                trend = current;
                count = 2;
            }
            if count >= 6 {
                out.push(Violation {
                    rule: Rule::Trend,
                    index: i,
                    message: format!(
                        "Rule 3: 6 consecutive points increasing or decreasing at point {}",
                        i + 1
                    ),
                });
            }
        } else {
            count = 1;
            trend = 0;
        }
    }
}

/// Rule 4: an alternating-direction run of length 14 or more.
///
/// Every end index from 13 on is tested independently: the window passes
/// only if each adjacent pair of steps inside it has strictly opposite
/// signs (product < 0); a single flat or same-direction pair disqualifies
/// the window. No suppression of overlapping windows.
fn check_alternating(values: &[f64], out: &mut Vec<Violation>) {
    if values.len() < 14 {
        return;
    }
    for i in 13..values.len() {
        // First step pair needs values[j-2], so the window starts at the
        // first in-bounds pair.
        let start = (i - 12).max(2);
        let alternating = (start..=i).all(|j| {
            let d1 = values[j] - values[j - 1];
            let d2 = values[j - 1] - values[j - 2];
            d1 * d2 < 0.0
        });
        if alternating {
            out.push(Violation {
                rule: Rule::Alternating,
                index: i,
                message: format!("Rule 4: 14 points alternating direction at point {}", i + 1),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(violations: &[Violation], rule: Rule) -> Vec<usize> {
        violations
            .iter()
            .filter(|v| v.rule == rule)
            .map(|v| v.index)
            .collect()
    }

    #[test]
    fn test_zero_sigma_guard() {
        let data = [0.0, 100.0, -100.0];
        assert!(detect(&data, 0.0, 1.0, -1.0, 0.0).is_empty());
        assert!(detect(&data, 0.0, 1.0, -1.0, -1.0).is_empty());
        assert!(detect(&data, 0.0, 1.0, -1.0, f64::NAN).is_empty());
    }

    #[test]
    fn test_rule1_flags_exact_index() {
        let data = [10.0, 10.0, 10.0, 100.0, 10.0];
        let v = detect(&data, 10.0, 12.0, 8.0, 1.0);
        assert_eq!(indices(&v, Rule::OutsideLimits), vec![3]);
    }

    #[test]
    fn test_rule1_on_limit_not_flagged() {
        let data = [12.0, 8.0, 10.0];
        let v = detect(&data, 10.0, 12.0, 8.0, 1.0);
        assert!(indices(&v, Rule::OutsideLimits).is_empty());
    }

    #[test]
    fn test_rule2_fires_at_ninth_point() {
        let data = [1.0; 9];
        let v = detect(&data, 0.0, 10.0, -10.0, 1.0);
        assert_eq!(indices(&v, Rule::RunOneSide), vec![8]);
    }

    #[test]
    fn test_rule2_retriggers_while_run_continues() {
        let data = [1.0; 11];
        let v = detect(&data, 0.0, 10.0, -10.0, 1.0);
        assert_eq!(indices(&v, Rule::RunOneSide), vec![8, 9, 10]);
    }

    #[test]
    fn test_rule2_center_point_resets_run() {
        // 8 above, one exactly on center, 8 above: no run reaches 9
        let mut data = vec![1.0; 8];
        data.push(0.0);
        data.extend(vec![1.0; 8]);
        let v = detect(&data, 0.0, 10.0, -10.0, 1.0);
        assert!(indices(&v, Rule::RunOneSide).is_empty());
    }

    #[test]
    fn test_rule3_strict_increase_fires_at_sixth() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let v = detect(&data, 3.5, 100.0, -100.0, 1.0);
        assert_eq!(indices(&v, Rule::Trend), vec![5]);
    }

    #[test]
    fn test_rule3_run_restarts_from_direction_change() {
        // Down-step at index 2 restarts the run; the 6-point climb
        // completes only at index 7.
        let data = [1.0, 2.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let v = detect(&data, 3.0, 100.0, -100.0, 1.0);
        assert_eq!(indices(&v, Rule::Trend), vec![7]);
    }

    #[test]
    fn test_rule3_flat_step_resets() {
        let data = [1.0, 2.0, 3.0, 3.0, 4.0, 5.0, 6.0, 7.0];
        let v = detect(&data, 4.0, 100.0, -100.0, 1.0);
        // Flat step at index 3 resets; only 5 rising steps remain after it
        assert!(indices(&v, Rule::Trend).is_empty());
    }

    #[test]
    fn test_rule4_fourteen_alternating() {
        let data: Vec<f64> = (0..14).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let v = detect(&data, 0.0, 10.0, -10.0, 1.0);
        assert_eq!(indices(&v, Rule::Alternating), vec![13]);
    }

    #[test]
    fn test_rule4_window_per_end_index() {
        let data: Vec<f64> = (0..16).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        let v = detect(&data, 0.0, 10.0, -10.0, 1.0);
        assert_eq!(indices(&v, Rule::Alternating), vec![13, 14, 15]);
    }

    #[test]
    fn test_rule4_single_flat_pair_disqualifies() {
        let mut data: Vec<f64> = (0..14).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();
        data[7] = data[6]; // flat step in the middle
        let v = detect(&data, 0.0, 10.0, -10.0, 1.0);
        assert!(indices(&v, Rule::Alternating).is_empty());
    }

    #[test]
    fn test_quiet_sample_is_clean() {
        // Strictly inside limits, no one-sided run, no trend, no alternation
        let data = [
            10.1, 9.8, 10.2, 9.9, 9.9, 10.15, 9.85, 10.05, 10.05, 9.95,
        ];
        let v = detect(&data, 10.0, 12.0, 8.0, 0.5);
        assert!(v.is_empty(), "unexpected violations: {v:?}");
    }

    #[test]
    fn test_results_concatenated_not_deduplicated() {
        // An extreme strictly-increasing tail: rule 1 and rule 3 both fire,
        // some indices appear twice.
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 50.0];
        let v = detect(&data, 3.0, 10.0, -10.0, 1.0);
        assert_eq!(indices(&v, Rule::OutsideLimits), vec![5]);
        assert_eq!(indices(&v, Rule::Trend), vec![5]);
    }
}
