use crate::cli::commands::prepare_request;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::pipeline::build_report;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        inputs,
        rules,
        format,
        dataset,
        file,
        force,
    } = cmd
    {
        let Some(request) = prepare_request(inputs, rules, cfg)? else {
            return Ok(());
        };
        let report = build_report(&request)?;
        ExportLogic::export(
            &report,
            &request.options,
            &request.selection,
            *format,
            *dataset,
            &expand_tilde(file),
            *force,
        )?;
    }
    Ok(())
}
