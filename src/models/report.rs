use serde::Serialize;

use crate::models::WorkOrder;

/// A work order after the left joins with the timesheet and the equipment
/// table. `None` marks a work order with no match on that side.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub key: String,
    pub client: String,
    pub intervention_type: String,
    pub location: String,
    pub position: String,
    pub technician: Option<String>,
    pub team: Option<String>,
    pub manufacturer: Option<String>,
    pub status: String,
    pub is_planned: bool,
}

impl ReportRow {
    pub fn from_work_order(wo: &WorkOrder) -> Self {
        Self {
            key: wo.key.clone(),
            client: wo.client.clone(),
            intervention_type: wo.intervention_type.clone(),
            location: wo.location.clone(),
            position: wo.position.clone(),
            technician: None,
            team: None,
            manufacturer: None,
            status: wo.status.clone(),
            is_planned: wo.is_planned,
        }
    }

    pub fn technician_or<'a>(&'a self, missing: &'a str) -> &'a str {
        self.technician.as_deref().unwrap_or(missing)
    }

    pub fn team_or<'a>(&'a self, missing: &'a str) -> &'a str {
        self.team.as_deref().unwrap_or(missing)
    }

    pub fn manufacturer_or<'a>(&'a self, missing: &'a str) -> &'a str {
        self.manufacturer.as_deref().unwrap_or(missing)
    }
}

/// Headline numbers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Kpi {
    pub total: usize,
    pub planned: usize,
    pub unplanned: usize,
    /// Percentage of planned work orders, two decimals, 0 when `total == 0`.
    pub rate: f64,
}

/// One stacked segment: distinct work orders for a (team, status) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartBar {
    pub team: String,
    pub status: String,
    pub count: usize,
}

/// Everything the presentation layer needs, produced in one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub kpi: Kpi,
    pub chart: Vec<ChartBar>,
    /// Detail rows sorted by work-order key.
    pub detail: Vec<ReportRow>,
    /// Positions observed in the field extraction (filter options).
    pub positions: Vec<String>,
    /// Manufacturers observed after the join (filter options).
    pub manufacturers: Vec<String>,
    /// Extraction rows dropped because their key was already seen.
    pub duplicate_keys_dropped: usize,
}
