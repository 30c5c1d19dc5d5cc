//! Grain reduction: collapse a table to exactly one row per work-order key.
//!
//! All reducers keep the output in order of first appearance of the key
//! and are idempotent.

use crate::errors::{AppError, AppResult};
use crate::models::{Assignment, EquipmentRecord, MasterDuplicates, TieBreak, TimeEntry, WorkOrder};
use std::collections::{HashMap, HashSet};

/// Picks the technician/team pair that owns each work order.
pub trait AssignmentReducer {
    fn reduce(&self, entries: &[TimeEntry]) -> Vec<Assignment>;
}

/// Sum hours per (key, employee, team) and keep the heaviest group.
/// Equal totals go to the group seen first.
pub struct MostHours;

/// Keep the first timesheet line of each key, hours ignored.
pub struct FirstSeen;

impl AssignmentReducer for MostHours {
    fn reduce(&self, entries: &[TimeEntry]) -> Vec<Assignment> {
        // (key, employee, team) → index in `groups`
        let mut index: HashMap<(&str, &str, &str), usize> = HashMap::new();
        let mut groups: Vec<Assignment> = Vec::new();

        for e in entries.iter().filter(|e| !e.key.is_empty()) {
            let slot = (e.key.as_str(), e.employee.as_str(), e.team.as_str());
            match index.get(&slot) {
                Some(&i) => groups[i].hours += e.hours,
                None => {
                    index.insert(slot, groups.len());
                    groups.push(Assignment {
                        key: e.key.clone(),
                        technician: e.employee.clone(),
                        team: e.team.clone(),
                        hours: e.hours,
                    });
                }
            }
        }

        let mut best: HashMap<String, usize> = HashMap::new();
        let mut order: Vec<String> = Vec::new();

        for (i, g) in groups.iter().enumerate() {
            match best.get(&g.key) {
                Some(&cur) if groups[cur].hours >= g.hours => {}
                Some(_) => {
                    best.insert(g.key.clone(), i);
                }
                None => {
                    best.insert(g.key.clone(), i);
                    order.push(g.key.clone());
                }
            }
        }

        order
            .iter()
            .filter_map(|k| best.get(k).map(|&i| groups[i].clone()))
            .collect()
    }
}

impl AssignmentReducer for FirstSeen {
    fn reduce(&self, entries: &[TimeEntry]) -> Vec<Assignment> {
        first_by_key(entries, |e| e.key.as_str())
            .into_iter()
            .map(|e| Assignment {
                key: e.key.clone(),
                technician: e.employee.clone(),
                team: e.team.clone(),
                hours: e.hours,
            })
            .collect()
    }
}

/// Reducer for the configured policy.
pub fn assignment_reducer(policy: TieBreak) -> Box<dyn AssignmentReducer> {
    match policy {
        TieBreak::MostHours => Box::new(MostHours),
        TieBreak::FirstSeen => Box::new(FirstSeen),
    }
}

pub fn reduce_assignments(entries: &[TimeEntry], policy: TieBreak) -> Vec<Assignment> {
    let blank = entries.iter().filter(|e| e.key.is_empty()).count();
    if blank > 0 {
        tracing::warn!(lines = blank, "timesheet lines without a work-order key ignored");
    }

    let reduced = assignment_reducer(policy).reduce(entries);
    tracing::debug!(
        policy = policy.as_str(),
        lines = entries.len(),
        work_orders = reduced.len(),
        "timesheet reduced"
    );
    reduced
}

/// First manufacturer seen per key.
pub fn reduce_equipment(records: &[EquipmentRecord]) -> Vec<EquipmentRecord> {
    let reduced: Vec<EquipmentRecord> = first_by_key(records, |r| r.key.as_str())
        .into_iter()
        .cloned()
        .collect();
    tracing::debug!(
        lines = records.len(),
        work_orders = reduced.len(),
        "equipment reduced"
    );
    reduced
}

/// Bring the extraction table to one row per key.
///
/// Returns the reduced rows and the number of rows dropped. Under
/// [`MasterDuplicates::Reject`] any repeated key is an error.
pub fn reduce_master(
    orders: Vec<WorkOrder>,
    policy: MasterDuplicates,
) -> AppResult<(Vec<WorkOrder>, usize)> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut duplicates: Vec<String> = Vec::new();
    let mut kept = Vec::with_capacity(orders.len());
    let mut blank = 0;

    for wo in orders {
        if wo.key.is_empty() {
            blank += 1;
            continue;
        }
        if seen.insert(wo.key.clone()) {
            kept.push(wo);
        } else {
            duplicates.push(wo.key);
        }
    }

    if blank > 0 {
        tracing::warn!(rows = blank, "extraction rows without a work-order key ignored");
    }

    if duplicates.is_empty() {
        return Ok((kept, 0));
    }

    match policy {
        MasterDuplicates::Reject => {
            let mut keys = duplicates.clone();
            keys.sort();
            keys.dedup();
            Err(AppError::DuplicateKeys {
                table: "extraction".to_string(),
                keys: keys.join(", "),
            })
        }
        MasterDuplicates::Reduce => {
            tracing::warn!(
                dropped = duplicates.len(),
                "extraction repeats work-order keys, keeping the first row of each"
            );
            Ok((kept, duplicates.len()))
        }
    }
}

fn first_by_key<'a, T, F>(items: &'a [T], key: F) -> Vec<&'a T>
where
    F: Fn(&T) -> &str,
{
    let mut seen: HashSet<&str> = HashSet::new();
    items
        .iter()
        .filter(|item| {
            let k = key(*item);
            !k.is_empty() && seen.insert(k)
        })
        .collect()
}
