//! orkpi main entrypoint.

use orkpi::run;
use orkpi::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
