//! Canonical text forms shared by every input table.

use crate::ingest::table::Cell;
use crate::models::PlannedMatch;

/// Strip surrounding whitespace and turn non-breaking spaces into plain ones.
pub fn clean_text(raw: &str) -> String {
    raw.replace(['\u{00A0}', '\u{202F}'], " ").trim().to_string()
}

/// Category/status form: cleaned and upper-cased (Unicode aware, so
/// `é` becomes `É`).
pub fn canonical_category(raw: &str) -> String {
    clean_text(raw).to_uppercase()
}

/// Hours worked. Anything that is not a finite number counts as zero.
pub fn coerce_hours(cell: &Cell) -> f64 {
    let value = match cell {
        Cell::Number(n) => *n,
        Cell::Text(s) => clean_text(s).parse::<f64>().unwrap_or(0.0),
        Cell::Empty | Cell::Bool(_) => 0.0,
    };

    if value.is_finite() { value } else { 0.0 }
}

/// Decides whether a status text means "planned".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMatcher {
    policy: PlannedMatch,
    needle: String,
}

impl PlannedMatcher {
    /// `label` is used by [`PlannedMatch::Exact`], `marker` by
    /// [`PlannedMatch::Contains`]; both are canonicalised here.
    pub fn new(policy: PlannedMatch, label: &str, marker: &str) -> Self {
        let needle = match policy {
            PlannedMatch::Exact => canonical_category(label),
            PlannedMatch::Contains => canonical_category(marker),
        };
        Self { policy, needle }
    }

    /// `status` may be raw or already canonical.
    pub fn is_planned(&self, status: &str) -> bool {
        let status = canonical_category(status);
        match self.policy {
            PlannedMatch::Exact => status == self.needle,
            PlannedMatch::Contains => !self.needle.is_empty() && status.contains(&self.needle),
        }
    }
}
