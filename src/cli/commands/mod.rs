pub mod categories;
pub mod config;
pub mod export;
pub mod init;
pub mod report;

use crate::cli::parser::{InputArgs, RuleArgs};
use crate::config::Config;
use crate::core::filter::Selection;
use crate::core::pipeline::{ReportOptions, ReportRequest};
use crate::errors::AppResult;
use crate::ingest::{self, InputPaths};
use crate::ui::messages::info;
use crate::utils::path::expand_tilde;

impl InputArgs {
    pub fn to_paths(&self) -> InputPaths {
        InputPaths {
            extraction: self.extraction.as_deref().map(expand_tilde),
            timesheet: self.timesheet.as_deref().map(expand_tilde),
            equipment: self.equipment.as_deref().map(expand_tilde),
        }
    }
}

impl RuleArgs {
    /// Config values with the command-line overrides applied.
    pub fn options(&self, cfg: &Config) -> ReportOptions {
        let mut opts = ReportOptions::from_config(cfg);
        if let Some(p) = self.tie_break {
            opts.tie_break = p;
        }
        if let Some(p) = self.planned_match {
            opts.planned_match = p;
        }
        if let Some(p) = self.filter_order {
            opts.filter_order = p;
        }
        if let Some(p) = self.master_duplicates {
            opts.master_duplicates = p;
        }
        if self.all_locations {
            opts.field_locations.clear();
        }
        opts
    }

    pub fn selection(&self) -> Selection {
        Selection::new(&self.positions, &self.manufacturers)
    }
}

/// Build the request for this invocation. `None` when a required file is
/// missing: the user is told what to supply and nothing runs.
pub(crate) fn prepare_request(
    inputs: &InputArgs,
    rules: &RuleArgs,
    cfg: &Config,
) -> AppResult<Option<ReportRequest>> {
    let paths = inputs.to_paths();
    let missing = paths.missing();

    let Some(dataset) = ingest::load_dataset(&paths)? else {
        info(format!(
            "Provide the processed extraction and the timesheet to start. Missing: {}",
            missing.join(", ")
        ));
        return Ok(None);
    };

    Ok(Some(ReportRequest {
        dataset,
        columns: cfg.columns.clone(),
        options: rules.options(cfg),
        selection: rules.selection(),
    }))
}
