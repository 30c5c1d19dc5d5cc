//! The report definition, end to end.
//!
//! `build_report` is a pure function of a [`ReportRequest`]: the same
//! tables, options and selection always give the same [`Report`].

use crate::config::{ColumnConfig, Config};
use crate::core::filter::{self, Selection};
use crate::core::normalize::PlannedMatcher;
use crate::core::{chart, dedup, join, kpi};
use crate::errors::AppResult;
use crate::ingest::{self, Dataset};
use crate::models::{FilterOrder, MasterDuplicates, PlannedMatch, Report, ReportRow, TieBreak};
use serde::Serialize;

/// Business-rule choices for one run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportOptions {
    pub planned_match: PlannedMatch,
    pub planned_label: String,
    pub planned_marker: String,
    pub tie_break: TieBreak,
    pub filter_order: FilterOrder,
    pub master_duplicates: MasterDuplicates,
    pub field_locations: Vec<String>,
    pub missing_label: String,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl ReportOptions {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            planned_match: cfg.planned_match,
            planned_label: cfg.planned_label.clone(),
            planned_marker: cfg.planned_marker.clone(),
            tie_break: cfg.tie_break,
            filter_order: cfg.filter_order,
            master_duplicates: cfg.master_duplicates,
            field_locations: cfg.field_locations.clone(),
            missing_label: cfg.missing_label.clone(),
        }
    }

    pub fn matcher(&self) -> PlannedMatcher {
        PlannedMatcher::new(self.planned_match, &self.planned_label, &self.planned_marker)
    }
}

/// Everything one interaction needs, rebuilt from scratch every time.
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRequest {
    pub dataset: Dataset,
    pub columns: ColumnConfig,
    pub options: ReportOptions,
    pub selection: Selection,
}

/// Normalize, reduce, join, then hand over to [`run_pipeline`].
pub fn build_report(req: &ReportRequest) -> AppResult<Report> {
    let opts = &req.options;
    let matcher = opts.matcher();

    let orders = ingest::read_work_orders(&req.dataset.extraction, &req.columns.extraction, &matcher)?;
    let orders = filter::restrict_locations(orders, &opts.field_locations);
    let (orders, dropped) = dedup::reduce_master(orders, opts.master_duplicates)?;

    let entries = ingest::read_time_entries(&req.dataset.timesheet, &req.columns.timesheet)?;
    let assignments = dedup::reduce_assignments(&entries, opts.tie_break);

    let equipment = match &req.dataset.equipment {
        Some(table) => {
            let records = ingest::read_equipment(table, &req.columns.equipment)?;
            Some(dedup::reduce_equipment(&records))
        }
        None => None,
    };

    let rows = join::enrich(&orders, &assignments, equipment.as_deref())?;

    let mut report = run_pipeline(rows, opts, &req.selection);
    report.duplicate_keys_dropped = dropped;
    Ok(report)
}

/// Filtering, KPI and presentation tables over already-joined rows.
pub fn run_pipeline(rows: Vec<ReportRow>, opts: &ReportOptions, selection: &Selection) -> Report {
    let missing = opts.missing_label.as_str();
    let positions = filter::observed_positions(&rows);
    let manufacturers = filter::observed_manufacturers(&rows, missing);

    let (kpi, mut display) = match opts.filter_order {
        FilterOrder::BeforeKpi => {
            let by_position = filter::filter_positions(&rows, selection);
            let filtered = filter::filter_manufacturers(&by_position, selection, missing);
            (kpi::compute_kpi(&filtered), filtered)
        }
        FilterOrder::AfterKpi => {
            let by_position = filter::filter_positions(&rows, selection);
            let kpi = kpi::compute_kpi(&by_position);
            let shown = filter::filter_manufacturers(&by_position, selection, missing);
            (kpi, shown)
        }
    };

    tracing::info!(
        total = kpi.total,
        planned = kpi.planned,
        unplanned = kpi.unplanned,
        rate = kpi.rate,
        order = opts.filter_order.as_str(),
        "kpi computed"
    );

    let chart = chart::aggregate(&display, missing);
    display.sort_by(|a, b| a.key.cmp(&b.key));

    Report {
        kpi,
        chart,
        detail: display,
        positions,
        manufacturers,
        duplicate_keys_dropped: 0,
    }
}
