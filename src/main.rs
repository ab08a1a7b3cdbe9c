//! rtable main entrypoint.

use rtable::run;
use rtable::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
