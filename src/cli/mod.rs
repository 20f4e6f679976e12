//! CLI module for rosterdesk
//!
//! Provides command-line interface for:
//! - serve: run the dashboard HTTP API
//! - overview / list: read the roster as a signed-in user
//! - validate / blank: offline form helpers
//! - submit: add or update one student

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{run, run_command};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_request, write_error, write_response};
