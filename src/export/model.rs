// src/export/model.rs

use crate::core::filter::Selection;
use crate::core::pipeline::ReportOptions;
use crate::models::{ChartBar, Kpi, Report, ReportRow};
use crate::utils::format_rate;
use serde::Serialize;

/// Flat detail row, headed like the dashboard table.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct DetailExport {
    #[serde(rename = "OR")]
    pub key: String,
    #[serde(rename = "Nom client")]
    pub client: String,
    #[serde(rename = "Type intervention")]
    pub intervention_type: String,
    #[serde(rename = "Localisation")]
    pub location: String,
    #[serde(rename = "Position")]
    pub position: String,
    #[serde(rename = "Technicien")]
    pub technician: String,
    #[serde(rename = "Equipe")]
    pub team: String,
    #[serde(rename = "Constructeur")]
    pub manufacturer: String,
    #[serde(rename = "Planifié ?")]
    pub status: String,
}

impl DetailExport {
    pub fn from_row(r: &ReportRow, missing: &str) -> Self {
        Self {
            key: r.key.clone(),
            client: r.client.clone(),
            intervention_type: r.intervention_type.clone(),
            location: r.location.clone(),
            position: r.position.clone(),
            technician: r.technician_or(missing).to_string(),
            team: r.team_or(missing).to_string(),
            manufacturer: r.manufacturer_or(missing).to_string(),
            status: r.status.clone(),
        }
    }
}

pub(crate) fn detail_rows(rows: &[ReportRow], missing: &str) -> Vec<DetailExport> {
    rows.iter().map(|r| DetailExport::from_row(r, missing)).collect()
}

/// Header per CSV / XLSX / PDF
pub(crate) fn detail_headers() -> Vec<&'static str> {
    vec![
        "OR",
        "Nom client",
        "Type intervention",
        "Localisation",
        "Position",
        "Technicien",
        "Equipe",
        "Constructeur",
        "Planifié ?",
    ]
}

pub(crate) fn detail_to_row(d: &DetailExport) -> Vec<String> {
    vec![
        d.key.clone(),
        d.client.clone(),
        d.intervention_type.clone(),
        d.location.clone(),
        d.position.clone(),
        d.technician.clone(),
        d.team.clone(),
        d.manufacturer.clone(),
        d.status.clone(),
    ]
}

pub(crate) fn details_to_table(details: &[DetailExport]) -> Vec<Vec<String>> {
    details.iter().map(detail_to_row).collect()
}

pub(crate) fn chart_headers() -> Vec<&'static str> {
    vec!["Equipe", "Planifié ?", "OR"]
}

pub(crate) fn chart_to_table(bars: &[ChartBar]) -> Vec<Vec<String>> {
    bars.iter()
        .map(|b| vec![b.team.clone(), b.status.clone(), b.count.to_string()])
        .collect()
}

/// KPI as (label, value) pairs, in display order.
pub(crate) fn kpi_lines(kpi: &Kpi) -> Vec<(&'static str, String)> {
    vec![
        ("Total OR", kpi.total.to_string()),
        ("Total OR non planifiés", kpi.unplanned.to_string()),
        ("Total OR planifiés", kpi.planned.to_string()),
        ("Taux de planification", format_rate(kpi.rate)),
    ]
}

/// Full JSON document: KPI, chart data, detail and the rules that produced them.
#[derive(Serialize, Debug)]
pub struct ReportDocument<'a> {
    pub generated_at: String,
    pub options: &'a ReportOptions,
    pub selected_positions: Option<Vec<String>>,
    pub selected_manufacturers: Option<Vec<String>>,
    pub kpi: Kpi,
    pub chart: &'a [ChartBar],
    pub detail: Vec<DetailExport>,
    pub positions: &'a [String],
    pub manufacturers: &'a [String],
    pub duplicate_keys_dropped: usize,
}

impl<'a> ReportDocument<'a> {
    pub fn new(report: &'a Report, options: &'a ReportOptions, selection: &Selection) -> Self {
        Self {
            generated_at: chrono::Local::now().to_rfc3339(),
            options,
            selected_positions: selection
                .positions
                .as_ref()
                .map(|s| s.iter().cloned().collect()),
            selected_manufacturers: selection
                .manufacturers
                .as_ref()
                .map(|s| s.iter().cloned().collect()),
            kpi: report.kpi,
            chart: &report.chart,
            detail: detail_rows(&report.detail, &options.missing_label),
            positions: &report.positions,
            manufacturers: &report.manufacturers,
            duplicate_keys_dropped: report.duplicate_keys_dropped,
        }
    }
}
