use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::Path;

/// Handle the `init` command: write the default configuration file.
pub fn handle(path: &Path, force: bool) -> AppResult<()> {
    println!("⚙️  Initializing orkpi…");

    if Config::init(path, force)? {
        success(format!("Config file: {}", path.display()));
    } else {
        info(format!(
            "Config file already exists: {} (use --force to reset it)",
            path.display()
        ));
    }

    Ok(())
}
