// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::model::{DetailExport, ReportDocument, chart_headers};
use crate::export::notify_export_success;
use crate::models::ChartBar;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export JSON pretty-printed.
pub(crate) fn export_json(doc: &ReportDocument<'_>, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(doc)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV of the detail table (serde writes the header).
pub(crate) fn export_csv_detail(details: &[DetailExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting detail to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    if details.is_empty() {
        // serde writes the header with the first record only
        wtr.write_record(crate::export::model::detail_headers())?;
    }
    for item in details {
        wtr.serialize(item)?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Export CSV of the chart aggregation.
pub(crate) fn export_csv_chart(bars: &[ChartBar], path: &Path) -> AppResult<()> {
    info(format!("Exporting chart data to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(chart_headers())?;
    for b in bars {
        let count = b.count.to_string();
        wtr.write_record([b.team.as_str(), b.status.as_str(), count.as_str()])?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
