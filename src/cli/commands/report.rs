use crate::cli::commands::prepare_request;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::{statuses, teams};
use crate::core::pipeline::{ReportOptions, build_report};
use crate::errors::AppResult;
use crate::export::ReportDocument;
use crate::export::logic::CHART_TITLE;
use crate::models::{ChartBar, Report};
use crate::ui::messages::{caption, header, info, metric, warning};
use crate::utils::colors::{colorize_status, paint_segment};
use crate::utils::formatting::{pad_right, truncate, wrap_text};
use crate::utils::format_rate;
use crate::utils::table::{Column, Table};

const BAR_WIDTH: usize = 40;

/// Handle the `report` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Report {
        inputs,
        rules,
        limit,
        json,
    } = cmd
    {
        let Some(request) = prepare_request(inputs, rules, cfg)? else {
            return Ok(());
        };
        let report = build_report(&request)?;

        if *json {
            let doc = ReportDocument::new(&report, &request.options, &request.selection);
            println!("{}", serde_json::to_string_pretty(&doc)?);
            return Ok(());
        }

        let limit = limit.unwrap_or(cfg.detail_limit);
        print_report(&report, &request.options, limit);
    }
    Ok(())
}

fn print_report(report: &Report, opts: &ReportOptions, limit: usize) {
    header("Validation KPI Service Response");
    caption(format!(
        "planned match: {} · tie-break: {} · filters: {}",
        opts.planned_match.as_str(),
        opts.tie_break.as_str(),
        opts.filter_order.as_str()
    ));

    if report.duplicate_keys_dropped > 0 {
        warning(format!(
            "{} extraction rows repeated an OR and were ignored",
            report.duplicate_keys_dropped
        ));
    }

    println!();
    metric("Total OR non planifiés", report.kpi.unplanned);
    metric("Total OR planifiés", report.kpi.planned);
    metric("Taux de planification", format_rate(report.kpi.rate));

    header(CHART_TITLE);
    print_chart(&report.chart);

    header("Détail des OR Field retenus dans les KPI");
    print_detail(report, &opts.missing_label, limit);

    println!();
    caption(wrap_text(
        "Reference run to validate the KPI business rules before they are \
         implemented in the BI tool.",
        80,
    ));
}

/// One horizontal stacked bar per team.
fn print_chart(bars: &[ChartBar]) {
    if bars.is_empty() {
        info("No work order to chart.");
        return;
    }

    let legend = statuses(bars);
    let team_list = teams(bars);

    let legend_line: Vec<String> = legend
        .iter()
        .enumerate()
        .map(|(i, s)| format!("{} {}", paint_segment(i, "█", 2), s))
        .collect();
    println!("  {}\n", legend_line.join("   "));

    let max_total = team_list
        .iter()
        .map(|t| bars.iter().filter(|b| b.team == *t).map(|b| b.count).sum::<usize>())
        .max()
        .unwrap_or(1)
        .max(1);
    let label_w = team_list.iter().map(|t| t.chars().count()).max().unwrap_or(0).min(24);

    for team in team_list {
        let mut line = String::new();
        let mut counts = Vec::new();

        for (i, status) in legend.iter().enumerate() {
            let count = bars
                .iter()
                .find(|b| b.team == team && b.status == *status)
                .map(|b| b.count)
                .unwrap_or(0);
            if count == 0 {
                continue;
            }
            let cells = ((count * BAR_WIDTH) as f64 / max_total as f64).round().max(1.0) as usize;
            line.push_str(&paint_segment(i, "█", cells));
            counts.push(count.to_string());
        }

        println!(
            "  {}  {} {}",
            pad_right(&truncate(team, label_w), label_w),
            line,
            counts.join(" + ")
        );
    }
}

fn print_detail(report: &Report, missing: &str, limit: usize) {
    if report.detail.is_empty() {
        info("No work order matches the current selection.");
        return;
    }

    let mut table = Table::new(vec![
        Column::new("OR", 14),
        Column::new("Nom client", 28),
        Column::new("Type intervention", 20),
        Column::new("Localisation", 14),
        Column::new("Position", 14),
        Column::new("Technicien", 22),
        Column::new("Equipe", 18),
        Column::new("Constructeur", 16),
        Column::new("Planifié ?", 16),
    ]);

    let shown = if limit == 0 {
        report.detail.len()
    } else {
        limit.min(report.detail.len())
    };

    for r in report.detail.iter().take(shown) {
        table.add_row(vec![
            r.key.clone(),
            r.client.clone(),
            r.intervention_type.clone(),
            r.location.clone(),
            r.position.clone(),
            r.technician_or(missing).to_string(),
            r.team_or(missing).to_string(),
            r.manufacturer_or(missing).to_string(),
            colorize_status(&r.status, r.is_planned),
        ]);
    }

    print!("{}", table.render());

    if shown < report.detail.len() {
        caption(format!(
            "… {} more rows (use --limit 0 or export to see them all)",
            report.detail.len() - shown
        ));
    }
}
