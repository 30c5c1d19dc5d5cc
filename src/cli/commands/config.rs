use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use std::path::Path;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, path: &Path) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        migrate,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            let cfg = Config::load(path)?;
            println!("📄 Current configuration ({}):\n", path.display());
            ConfigLogic::print(path, &cfg)?;
        }

        if *check {
            ConfigLogic::check(path)?;
        }

        if *migrate {
            ConfigLogic::migrate(path)?;
        }

        if *edit_config {
            ConfigLogic::edit(path, editor)?;
        }
    }

    Ok(())
}
