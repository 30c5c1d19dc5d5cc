// src/export/pdf_export.rs

use crate::core::chart::{statuses, teams};
use crate::errors::{AppError, AppResult};
use crate::export::model::{DetailExport, detail_headers, details_to_table, kpi_lines};
use crate::export::notify_export_success;
use crate::export::pdf::{PdfBar, PdfReport};
use crate::models::{ChartBar, Kpi};
use crate::ui::messages::info;
use std::io;
use std::path::Path;

/// Summary page (KPI + chart) followed by the detail table.
pub(crate) fn export_pdf(
    kpi: &Kpi,
    bars: &[ChartBar],
    details: &[DetailExport],
    path: &Path,
    title: &str,
) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let lines: Vec<String> = kpi_lines(kpi)
        .into_iter()
        .map(|(label, value)| format!("{label}: {value}"))
        .collect();

    let legend = statuses(bars);
    let pdf_bars: Vec<PdfBar> = teams(bars)
        .into_iter()
        .map(|team| PdfBar {
            label: team.to_string(),
            segments: legend
                .iter()
                .enumerate()
                .map(|(i, status)| {
                    let count = bars
                        .iter()
                        .find(|b| b.team == team && b.status == *status)
                        .map(|b| b.count)
                        .unwrap_or(0);
                    (i, count)
                })
                .collect(),
        })
        .collect();

    let mut pdf = PdfReport::new();
    pdf.write_summary(title, &lines, &legend, &pdf_bars);
    pdf.write_table(
        "Détail des OR retenus",
        &detail_headers(),
        &details_to_table(details),
    );

    pdf.save(path)
        .map_err(|e| AppError::from(io::Error::other(format!("PDF export error: {e}"))))?;

    notify_export_success("PDF", path);
    Ok(())
}
