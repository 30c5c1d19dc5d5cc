//! Planned vs. unplanned completion rate.

use crate::models::{Kpi, ReportRow};
use std::collections::HashSet;

/// Round to two decimals, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Pure function of the rows: distinct keys only, order does not matter.
pub fn compute_kpi(rows: &[ReportRow]) -> Kpi {
    let all: HashSet<&str> = rows.iter().map(|r| r.key.as_str()).collect();
    let planned: HashSet<&str> = rows
        .iter()
        .filter(|r| r.is_planned)
        .map(|r| r.key.as_str())
        .collect();

    let total = all.len();
    let planned = planned.len();
    let rate = if total == 0 {
        0.0
    } else {
        round2(planned as f64 / total as f64 * 100.0)
    };

    Kpi {
        total,
        planned,
        unplanned: total - planned,
        rate,
    }
}
