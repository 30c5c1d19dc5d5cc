// src/export/logic.rs

use crate::core::filter::Selection;
use crate::core::pipeline::ReportOptions;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv_chart, export_csv_detail, export_json};
use crate::export::model::{ReportDocument, detail_rows};
use crate::export::pdf_export::export_pdf;
use crate::export::vega::export_vega;
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportDataset, ExportFormat};
use crate::models::Report;
use crate::ui::messages::warning;
use std::path::Path;

pub const CHART_TITLE: &str = "OR Field – Planifiés vs Non planifiés par équipe";

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `report` to `path`.
    ///
    /// - `csv`: one table, chosen by `dataset`
    /// - `json`: the whole report plus the options that produced it
    /// - `xlsx`: KPI, team pivot with chart, detail
    /// - `pdf`: summary page and detail table
    /// - `vega`: chart specification only
    pub fn export(
        report: &Report,
        options: &ReportOptions,
        selection: &Selection,
        format: ExportFormat,
        dataset: ExportDataset,
        path: &Path,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        if report.detail.is_empty() {
            warning("No work order matches the current selection, exporting an empty report.");
        }

        tracing::debug!(format = format.as_str(), path = %path.display(), "export");

        let missing = options.missing_label.as_str();

        match format {
            ExportFormat::Csv => match dataset {
                ExportDataset::Detail => {
                    export_csv_detail(&detail_rows(&report.detail, missing), path)?
                }
                ExportDataset::Chart => export_csv_chart(&report.chart, path)?,
            },
            ExportFormat::Json => {
                let doc = ReportDocument::new(report, options, selection);
                export_json(&doc, path)?
            }
            ExportFormat::Xlsx => export_xlsx(
                &report.kpi,
                &report.chart,
                &detail_rows(&report.detail, missing),
                path,
            )?,
            ExportFormat::Pdf => {
                let title = build_pdf_title();
                export_pdf(
                    &report.kpi,
                    &report.chart,
                    &detail_rows(&report.detail, missing),
                    path,
                    &title,
                )?
            }
            ExportFormat::Vega => export_vega(&report.chart, path, CHART_TITLE)?,
        }

        Ok(())
    }
}

/// PDF title stamped with the generation time.
fn build_pdf_title() -> String {
    format!(
        "Validation KPI Service Response – {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M")
    )
}
