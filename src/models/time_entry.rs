use serde::Serialize;

/// Raw timesheet line. Many lines per work order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeEntry {
    pub key: String,
    pub employee: String,
    pub team: String,
    pub hours: f64,
}

/// The technician/team pair retained for a work order after grain reduction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub key: String,
    pub technician: String,
    pub team: String,
    /// Hours credited to the retained pair (summed under most-hours,
    /// the single line under first-seen).
    pub hours: f64,
}
