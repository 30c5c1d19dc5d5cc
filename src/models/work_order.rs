use serde::Serialize;

/// One row of the work-order extraction, already normalized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WorkOrder {
    pub key: String,
    /// Canonical status text (cleaned, upper-case).
    pub status: String,
    pub is_planned: bool,
    pub client: String,
    pub intervention_type: String,
    pub location: String,
    pub position: String,
}
