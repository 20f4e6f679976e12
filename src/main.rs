//! rosterdesk CLI entry point
//!
//! Parses arguments, dispatches to the CLI module, prints failures as a
//! JSON error line, and exits non-zero.

use rosterdesk::cli;

fn main() {
    if let Err(e) = cli::run() {
        if cli::write_error(&e).is_err() {
            eprintln!("{}", e);
        }
        std::process::exit(1);
    }
}
