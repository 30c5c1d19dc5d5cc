//! Left joins of the extraction with the timesheet and equipment tables.
//!
//! The joins are plain relational left joins: a right-hand key that
//! appears twice yields two output rows. Grain reduction upstream is what
//! prevents that, and [`check_grain`] is the guard that proves it.

use crate::errors::{AppError, AppResult};
use crate::models::{Assignment, EquipmentRecord, ReportRow, WorkOrder};
use std::collections::{HashMap, HashSet};

fn index_by_key<'a, T, F>(items: &'a [T], key: F) -> HashMap<&'a str, Vec<&'a T>>
where
    F: Fn(&'a T) -> &'a str,
{
    let mut map: HashMap<&str, Vec<&T>> = HashMap::new();
    for item in items {
        map.entry(key(item)).or_default().push(item);
    }
    map
}

/// Extraction ⟕ timesheet assignments.
pub fn join_assignments(orders: &[WorkOrder], assignments: &[Assignment]) -> Vec<ReportRow> {
    let right = index_by_key(assignments, |a| a.key.as_str());
    let mut rows = Vec::with_capacity(orders.len());

    for wo in orders {
        match right.get(wo.key.as_str()) {
            Some(matches) => {
                for a in matches {
                    let mut row = ReportRow::from_work_order(wo);
                    row.technician = Some(a.technician.clone());
                    row.team = Some(a.team.clone());
                    rows.push(row);
                }
            }
            None => rows.push(ReportRow::from_work_order(wo)),
        }
    }

    rows
}

/// rows ⟕ equipment. Without an equipment table every manufacturer is missing.
pub fn join_equipment(rows: Vec<ReportRow>, equipment: Option<&[EquipmentRecord]>) -> Vec<ReportRow> {
    let Some(equipment) = equipment else {
        return rows;
    };

    let right = index_by_key(equipment, |e| e.key.as_str());
    let mut out = Vec::with_capacity(rows.len());

    for row in rows {
        match right.get(row.key.as_str()) {
            Some(matches) => {
                for e in matches {
                    let mut joined = row.clone();
                    joined.manufacturer = Some(e.manufacturer.clone());
                    out.push(joined);
                }
            }
            None => out.push(row),
        }
    }

    out
}

/// Row count must equal the number of distinct work orders.
pub fn check_grain(rows: &[ReportRow]) -> AppResult<()> {
    let keys: HashSet<&str> = rows.iter().map(|r| r.key.as_str()).collect();
    if rows.len() != keys.len() {
        tracing::error!(rows = rows.len(), keys = keys.len(), "join fan-out");
        return Err(AppError::FanOut {
            rows: rows.len(),
            keys: keys.len(),
        });
    }
    Ok(())
}

/// Both joins followed by the grain check.
pub fn enrich(
    orders: &[WorkOrder],
    assignments: &[Assignment],
    equipment: Option<&[EquipmentRecord]>,
) -> AppResult<Vec<ReportRow>> {
    let rows = join_assignments(orders, assignments);
    let rows = join_equipment(rows, equipment);
    check_grain(&rows)?;

    let unmatched = rows.iter().filter(|r| r.technician.is_none()).count();
    tracing::debug!(rows = rows.len(), without_technician = unmatched, "joins done");
    Ok(rows)
}
