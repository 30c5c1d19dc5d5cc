//! Declarative chart specification (Vega-Lite v5) for the team × status
//! stacked bar chart. Any Vega-Lite renderer can draw it as is.

use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::ChartBar;
use crate::ui::messages::info;
use serde_json::{Value, json};
use std::fs;
use std::path::Path;

pub const SCHEMA: &str = "https://vega.github.io/schema/vega-lite/v5.json";

/// x = team, stacked colour = status, y = distinct work orders, with the
/// count printed on every segment.
pub fn chart_spec(bars: &[ChartBar], title: &str) -> Value {
    let values: Vec<Value> = bars
        .iter()
        .map(|b| json!({ "team": b.team, "status": b.status, "count": b.count }))
        .collect();

    json!({
        "$schema": SCHEMA,
        "title": title,
        "data": { "values": values },
        "encoding": {
            "x": { "field": "team", "type": "nominal", "title": "Equipe" },
            "y": {
                "field": "count",
                "type": "quantitative",
                "stack": "zero",
                "title": "OR"
            }
        },
        "layer": [
            {
                "mark": "bar",
                "encoding": {
                    "color": { "field": "status", "type": "nominal", "title": "Planifié ?" }
                }
            },
            {
                "mark": { "type": "text", "dy": 10, "color": "white" },
                "encoding": {
                    "detail": { "field": "status" },
                    "text": { "field": "count", "type": "quantitative" }
                }
            }
        ]
    })
}

pub(crate) fn export_vega(bars: &[ChartBar], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting chart specification: {}", path.display()));

    let spec = chart_spec(bars, title);
    fs::write(path, serde_json::to_string_pretty(&spec)?)?;

    notify_export_success("Vega-Lite", path);
    Ok(())
}
