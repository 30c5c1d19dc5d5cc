//! Team × status aggregation behind the stacked bar chart.

use crate::models::{ChartBar, ReportRow};
use std::collections::{BTreeMap, BTreeSet};

/// Distinct work orders per (team, status), sorted by team then status.
/// Rows without a team are grouped under `missing_label`.
pub fn aggregate(rows: &[ReportRow], missing_label: &str) -> Vec<ChartBar> {
    let mut groups: BTreeMap<(String, String), BTreeSet<&str>> = BTreeMap::new();

    for r in rows {
        groups
            .entry((r.team_or(missing_label).to_string(), r.status.clone()))
            .or_default()
            .insert(r.key.as_str());
    }

    groups
        .into_iter()
        .map(|((team, status), keys)| ChartBar {
            team,
            status,
            count: keys.len(),
        })
        .collect()
}

/// Teams in chart order.
pub fn teams(bars: &[ChartBar]) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for b in bars {
        if out.last() != Some(&b.team.as_str()) {
            out.push(b.team.as_str());
        }
    }
    out
}

/// Status labels (stack segments) in a stable order.
pub fn statuses(bars: &[ChartBar]) -> Vec<&str> {
    bars.iter()
        .map(|b| b.status.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
