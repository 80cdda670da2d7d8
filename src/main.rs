//! rStringlog main entrypoint.

use rstringlog::run;

fn main() {
    if let Err(e) = run() {
        rstringlog::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
