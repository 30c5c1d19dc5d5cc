//! Category filters and the field-location business rule.

use crate::core::normalize::canonical_category;
use crate::models::{ReportRow, WorkOrder};
use std::collections::BTreeSet;

/// User-selected inclusion sets. `None` means "every observed category",
/// which makes the filter a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub positions: Option<BTreeSet<String>>,
    pub manufacturers: Option<BTreeSet<String>>,
}

fn to_set(values: &[String]) -> Option<BTreeSet<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values.iter().map(|v| canonical_category(v)).collect())
    }
}

impl Selection {
    pub fn all() -> Self {
        Self::default()
    }

    /// Empty lists select everything.
    pub fn new(positions: &[String], manufacturers: &[String]) -> Self {
        Self {
            positions: to_set(positions),
            manufacturers: to_set(manufacturers),
        }
    }

    pub fn keeps_position(&self, row: &ReportRow) -> bool {
        match &self.positions {
            None => true,
            Some(set) => set.contains(&canonical_category(&row.position)),
        }
    }

    pub fn keeps_manufacturer(&self, row: &ReportRow, missing_label: &str) -> bool {
        match &self.manufacturers {
            None => true,
            Some(set) => set.contains(&canonical_category(row.manufacturer_or(missing_label))),
        }
    }
}

pub fn filter_positions(rows: &[ReportRow], selection: &Selection) -> Vec<ReportRow> {
    let kept: Vec<ReportRow> = rows
        .iter()
        .filter(|r| selection.keeps_position(r))
        .cloned()
        .collect();
    tracing::debug!(before = rows.len(), after = kept.len(), "position filter");
    kept
}

pub fn filter_manufacturers(
    rows: &[ReportRow],
    selection: &Selection,
    missing_label: &str,
) -> Vec<ReportRow> {
    let kept: Vec<ReportRow> = rows
        .iter()
        .filter(|r| selection.keeps_manufacturer(r, missing_label))
        .cloned()
        .collect();
    tracing::debug!(before = rows.len(), after = kept.len(), "manufacturer filter");
    kept
}

/// Keep only "field" work orders. An empty location list keeps everything.
pub fn restrict_locations(orders: Vec<WorkOrder>, field_locations: &[String]) -> Vec<WorkOrder> {
    if field_locations.is_empty() {
        return orders;
    }

    let allowed: BTreeSet<String> = field_locations
        .iter()
        .map(|l| canonical_category(l))
        .collect();

    let before = orders.len();
    let kept: Vec<WorkOrder> = orders
        .into_iter()
        .filter(|wo| allowed.contains(&wo.location))
        .collect();

    tracing::debug!(before, after = kept.len(), "field-location rule");
    kept
}

/// Sorted distinct positions, i.e. the options of the position filter.
pub fn observed_positions(rows: &[ReportRow]) -> Vec<String> {
    rows.iter()
        .map(|r| r.position.clone())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Sorted distinct manufacturers; rows without one show as `missing_label`.
pub fn observed_manufacturers(rows: &[ReportRow], missing_label: &str) -> Vec<String> {
    rows.iter()
        .map(|r| r.manufacturer_or(missing_label).to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
