//! Loading and normalizing the three input tables.

pub mod table;

use crate::config::{EquipmentColumns, ExtractionColumns, TimesheetColumns};
use crate::core::normalize::{PlannedMatcher, canonical_category, clean_text, coerce_hours};
use crate::errors::AppResult;
use crate::models::{EquipmentRecord, TimeEntry, WorkOrder};
use std::path::PathBuf;
use table::RawTable;

/// Files supplied for one run. The equipment table is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputPaths {
    pub extraction: Option<PathBuf>,
    pub timesheet: Option<PathBuf>,
    pub equipment: Option<PathBuf>,
}

impl InputPaths {
    /// Human names of the required inputs that were not supplied.
    pub fn missing(&self) -> Vec<&'static str> {
        let mut out = Vec::new();
        if self.extraction.is_none() {
            out.push("extraction (--extraction)");
        }
        if self.timesheet.is_none() {
            out.push("timesheet (--timesheet)");
        }
        out
    }
}

/// Raw tables, as read from disk.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub extraction: RawTable,
    pub timesheet: RawTable,
    pub equipment: Option<RawTable>,
}

/// Read every supplied file. Returns `None` when a required file is missing:
/// the caller tells the user what to provide instead of running.
pub fn load_dataset(paths: &InputPaths) -> AppResult<Option<Dataset>> {
    let (Some(extraction), Some(timesheet)) = (&paths.extraction, &paths.timesheet) else {
        return Ok(None);
    };

    let extraction = RawTable::from_path(extraction, "extraction")?;
    let timesheet = RawTable::from_path(timesheet, "timesheet")?;
    let equipment = match &paths.equipment {
        Some(p) => Some(RawTable::from_path(p, "equipment")?),
        None => None,
    };

    Ok(Some(Dataset {
        extraction,
        timesheet,
        equipment,
    }))
}

pub fn read_work_orders(
    table: &RawTable,
    cols: &ExtractionColumns,
    matcher: &PlannedMatcher,
) -> AppResult<Vec<WorkOrder>> {
    let key = table.column(&cols.key)?;
    let status = table.column(&cols.status)?;
    let location = table.column(&cols.location)?;
    let position = table.column(&cols.position)?;
    let client = table.column(&cols.client)?;
    let intervention = table.column(&cols.intervention_type)?;

    let orders = table
        .rows
        .iter()
        .map(|row| {
            let status_text = canonical_category(&table.cell(row, status).as_text());
            WorkOrder {
                key: clean_text(&table.cell(row, key).as_text()),
                is_planned: matcher.is_planned(&status_text),
                status: status_text,
                client: clean_text(&table.cell(row, client).as_text()),
                intervention_type: clean_text(&table.cell(row, intervention).as_text()),
                location: canonical_category(&table.cell(row, location).as_text()),
                position: canonical_category(&table.cell(row, position).as_text()),
            }
        })
        .collect();

    Ok(orders)
}

pub fn read_time_entries(table: &RawTable, cols: &TimesheetColumns) -> AppResult<Vec<TimeEntry>> {
    let key = table.column(&cols.key)?;
    let employee = table.column(&cols.employee)?;
    let team = table.column(&cols.team)?;
    let hours = table.column(&cols.hours)?;

    let entries: Vec<TimeEntry> = table
        .rows
        .iter()
        .map(|row| TimeEntry {
            key: clean_text(&table.cell(row, key).as_text()),
            employee: clean_text(&table.cell(row, employee).as_text()),
            team: clean_text(&table.cell(row, team).as_text()),
            hours: coerce_hours(table.cell(row, hours)),
        })
        .collect();

    // a line without employee or team cannot own a work order
    let total = entries.len();
    let kept: Vec<TimeEntry> = entries
        .into_iter()
        .filter(|e| !e.employee.is_empty() && !e.team.is_empty())
        .collect();
    if kept.len() < total {
        tracing::warn!(
            lines = total - kept.len(),
            "timesheet lines without employee or team ignored"
        );
    }

    Ok(kept)
}

pub fn read_equipment(table: &RawTable, cols: &EquipmentColumns) -> AppResult<Vec<EquipmentRecord>> {
    let key = table.column(&cols.key)?;
    let manufacturer = table.column(&cols.manufacturer)?;

    // a blank manufacturer carries no information: the row is skipped so
    // that the work order reads as "no manufacturer" after the join
    Ok(table
        .rows
        .iter()
        .map(|row| EquipmentRecord {
            key: clean_text(&table.cell(row, key).as_text()),
            manufacturer: canonical_category(&table.cell(row, manufacturer).as_text()),
        })
        .filter(|r| !r.manufacturer.is_empty())
        .collect())
}
