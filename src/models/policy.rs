//! Named business-rule policies.
//!
//! The source dashboards disagree on these rules across versions, so each
//! one is an explicit value carried by the configuration and overridable
//! from the command line.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How a status text is recognised as "planned".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum PlannedMatch {
    /// Canonical status equals the canonical planned label.
    #[default]
    Exact,
    /// Canonical status contains the canonical planned marker.
    Contains,
}

/// Tie-break used to collapse the timesheet to one technician per work order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The technician who logged the most hours owns the work order.
    #[default]
    MostHours,
    /// The first row seen for the work order wins.
    FirstSeen,
}

/// When the category filters are applied relative to the KPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FilterOrder {
    /// Position and manufacturer filters both shape the published KPI.
    #[default]
    BeforeKpi,
    /// KPI uses the position filter only; the manufacturer filter only
    /// narrows the chart and the detail table.
    AfterKpi,
}

/// What to do when the extraction table repeats a work-order key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MasterDuplicates {
    /// Keep the first row per key.
    #[default]
    Reduce,
    /// Refuse the input.
    Reject,
}

impl PlannedMatch {
    pub fn as_str(&self) -> &'static str {
        match self {
            PlannedMatch::Exact => "exact",
            PlannedMatch::Contains => "contains",
        }
    }
}

impl TieBreak {
    pub fn as_str(&self) -> &'static str {
        match self {
            TieBreak::MostHours => "most-hours",
            TieBreak::FirstSeen => "first-seen",
        }
    }
}

impl FilterOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOrder::BeforeKpi => "before-kpi",
            FilterOrder::AfterKpi => "after-kpi",
        }
    }
}

impl MasterDuplicates {
    pub fn as_str(&self) -> &'static str {
        match self {
            MasterDuplicates::Reduce => "reduce",
            MasterDuplicates::Reject => "reject",
        }
    }
}
