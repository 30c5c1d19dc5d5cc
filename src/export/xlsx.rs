// src/export/xlsx.rs

use crate::core::chart::{statuses, teams};
use crate::errors::{AppError, AppResult};
use crate::export::model::{
    DetailExport, chart_headers, chart_to_table, detail_headers, details_to_table,
};
use crate::export::notify_export_success;
use crate::models::{ChartBar, Kpi};
use crate::ui::messages::info;
use rust_xlsxwriter::{
    Chart, ChartDataLabel, ChartType, Color, Format, FormatAlign, FormatBorder, FormatPattern,
    Workbook, Worksheet,
};
use std::path::Path;
use unicode_width::UnicodeWidthStr;

const KPI_SHEET: &str = "KPI";
const CHART_SHEET: &str = "Equipes";
const DETAIL_SHEET: &str = "Detail";

/// Export XLSX: KPI, team × status pivot with a stacked column chart, detail.
pub(crate) fn export_xlsx(
    kpi: &Kpi,
    bars: &[ChartBar],
    details: &[DetailExport],
    path: &Path,
) -> AppResult<()> {
    info(format!("Exporting to XLSX: {}", path.display()));

    let mut workbook = Workbook::new();

    // ---------------------------
    // KPI
    // ---------------------------
    let ws = workbook.add_worksheet();
    ws.set_name(KPI_SHEET).map_err(to_app_error)?;
    write_kpi(ws, kpi)?;

    // ---------------------------
    // Pivot + chart
    // ---------------------------
    let ws = workbook.add_worksheet();
    ws.set_name(CHART_SHEET).map_err(to_app_error)?;
    write_pivot_with_chart(ws, bars)?;

    // ---------------------------
    // Detail
    // ---------------------------
    let ws = workbook.add_worksheet();
    ws.set_name(DETAIL_SHEET).map_err(to_app_error)?;
    if details.is_empty() {
        ws.write(0, 0, "No data available").map_err(to_app_error)?;
    } else {
        write_table(ws, &detail_headers(), &details_to_table(details), &[])?;
    }

    // raw aggregation, handy for pivots of its own
    let ws = workbook.add_worksheet();
    ws.set_name("Chart data").map_err(to_app_error)?;
    write_table(ws, &chart_headers(), &chart_to_table(bars), &[2])?;

    workbook.save(path).map_err(to_app_error)?;

    notify_export_success("XLSX", path);
    Ok(())
}

fn header_format() -> Format {
    Format::new()
        .set_bold()
        .set_font_color(Color::RGB(0xFFFFFF))
        .set_background_color(Color::RGB(0x2F75B5))
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn band_format(row_index: usize) -> Format {
    let band = if row_index % 2 == 0 {
        Color::RGB(0xEAF3FB)
    } else {
        Color::RGB(0xFFFFFF)
    };
    Format::new()
        .set_background_color(band)
        .set_pattern(FormatPattern::Solid)
        .set_border(FormatBorder::Thin)
}

fn write_kpi(ws: &mut Worksheet, kpi: &Kpi) -> AppResult<()> {
    let header = header_format();
    ws.write_with_format(0, 0, "Indicateur", &header)
        .map_err(to_app_error)?;
    ws.write_with_format(0, 1, "Valeur", &header)
        .map_err(to_app_error)?;

    let rows: [(&str, f64, &str); 4] = [
        ("Total OR", kpi.total as f64, "0"),
        ("Total OR non planifiés", kpi.unplanned as f64, "0"),
        ("Total OR planifiés", kpi.planned as f64, "0"),
        ("Taux de planification (%)", kpi.rate, "0.00"),
    ];

    for (i, (label, value, num_format)) in rows.iter().enumerate() {
        let row = (i + 1) as u32;
        let fmt = band_format(i);
        ws.write_with_format(row, 0, *label, &fmt)
            .map_err(to_app_error)?;
        ws.write_with_format(
            row,
            1,
            *value,
            &band_format(i)
                .set_num_format(*num_format)
                .set_align(FormatAlign::Right),
        )
        .map_err(to_app_error)?;
    }

    ws.set_column_width(0, 30).map_err(to_app_error)?;
    ws.set_column_width(1, 14).map_err(to_app_error)?;
    Ok(())
}

/// Teams down, statuses across, distinct OR counts in the cells.
fn write_pivot_with_chart(ws: &mut Worksheet, bars: &[ChartBar]) -> AppResult<()> {
    let team_list = teams(bars);
    let status_list = statuses(bars);

    let header = header_format();
    ws.write_with_format(0, 0, "Equipe", &header)
        .map_err(to_app_error)?;
    for (c, status) in status_list.iter().enumerate() {
        ws.write_with_format(0, (c + 1) as u16, *status, &header)
            .map_err(to_app_error)?;
    }

    for (r, team) in team_list.iter().enumerate() {
        let row = (r + 1) as u32;
        let fmt = band_format(r);
        ws.write_with_format(row, 0, *team, &fmt)
            .map_err(to_app_error)?;

        for (c, status) in status_list.iter().enumerate() {
            let count = bars
                .iter()
                .find(|b| b.team == *team && b.status == *status)
                .map(|b| b.count)
                .unwrap_or(0);
            ws.write_with_format(row, (c + 1) as u16, count as f64, &band_format(r))
                .map_err(to_app_error)?;
        }
    }

    let first_width = team_list
        .iter()
        .map(|t| UnicodeWidthStr::width(*t))
        .chain(std::iter::once(6))
        .max()
        .unwrap_or(6);
    ws.set_column_width(0, first_width as f64 + 2.0)
        .map_err(to_app_error)?;

    if team_list.is_empty() {
        return Ok(());
    }

    let last_row = team_list.len() as u32;
    let mut chart = Chart::new(ChartType::ColumnStacked);
    chart
        .title()
        .set_name("OR Field – Planifiés vs Non planifiés par équipe");

    for c in 0..status_list.len() {
        let col = (c + 1) as u16;
        chart
            .add_series()
            .set_name((CHART_SHEET, 0, col))
            .set_categories((CHART_SHEET, 1, 0, last_row, 0))
            .set_values((CHART_SHEET, 1, col, last_row, col))
            .set_data_label(ChartDataLabel::new().show_value());
    }

    ws.insert_chart(1, (status_list.len() + 2) as u16, &chart)
        .map_err(to_app_error)?;
    Ok(())
}

/// Header + banded rows + auto column width. `numeric_cols` are written as numbers.
fn write_table(
    ws: &mut Worksheet,
    headers: &[&str],
    rows: &[Vec<String>],
    numeric_cols: &[usize],
) -> AppResult<()> {
    let header = header_format();
    for (col, h) in headers.iter().enumerate() {
        ws.write_with_format(0, col as u16, *h, &header)
            .map_err(to_app_error)?;
    }
    ws.set_freeze_panes(1, 0).ok();

    let mut col_widths: Vec<usize> = headers.iter().map(|h| UnicodeWidthStr::width(*h)).collect();

    for (row_index, values) in rows.iter().enumerate() {
        let row = (row_index + 1) as u32;
        let fmt = band_format(row_index);

        for (col, value) in values.iter().enumerate() {
            let c = col as u16;
            match value.parse::<f64>() {
                Ok(num) if numeric_cols.contains(&col) => {
                    ws.write_with_format(row, c, num, &fmt.clone().set_align(FormatAlign::Right))
                        .map_err(to_app_error)?;
                }
                _ => {
                    ws.write_with_format(row, c, value.as_str(), &fmt)
                        .map_err(to_app_error)?;
                }
            }
            if let Some(w) = col_widths.get_mut(col) {
                *w = (*w).max(UnicodeWidthStr::width(value.as_str()));
            }
        }
    }

    for (c, w) in col_widths.iter().enumerate() {
        ws.set_column_width(c as u16, *w as f64 + 2.0)
            .map_err(to_app_error)?;
    }
    Ok(())
}

fn to_app_error<E: std::fmt::Display>(e: E) -> AppError {
    AppError::Export(e.to_string())
}
