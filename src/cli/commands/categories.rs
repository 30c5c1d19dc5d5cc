use crate::cli::commands::prepare_request;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::filter::Selection;
use crate::core::pipeline::build_report;
use crate::errors::AppResult;
use crate::ui::messages::header;

/// Handle the `categories` command: the options a filter could offer.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Categories { inputs, rules } = cmd {
        let Some(mut request) = prepare_request(inputs, rules, cfg)? else {
            return Ok(());
        };
        // options are listed before any selection applies
        request.selection = Selection::all();
        let report = build_report(&request)?;

        header("Positions");
        for p in &report.positions {
            println!("  {}", if p.is_empty() { "\"\"" } else { p });
        }

        header("Manufacturers");
        for m in &report.manufacturers {
            println!("  {m}");
        }
    }
    Ok(())
}
