//! CLI argument definitions using clap
//!
//! Commands:
//! - rosterdesk serve --config <path>
//! - rosterdesk overview --config <path> --email <email>
//! - rosterdesk list --config <path> --email <email> [--search Q] [--sort FIELD] [--desc]
//! - rosterdesk validate < form.json
//! - rosterdesk blank
//! - rosterdesk submit --config <path> --email <email> [--id ID] < form.json
//!
//! Commands that sign in read the password from `ROSTERDESK_PASSWORD`.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// rosterdesk - student records dashboard
#[derive(Parser, Debug)]
#[command(name = "rosterdesk")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the dashboard HTTP API
    Serve {
        /// Path to configuration file
        #[arg(long, default_value = "./rosterdesk.json")]
        config: PathBuf,
    },

    /// Print overview statistics
    Overview {
        /// Path to configuration file
        #[arg(long, default_value = "./rosterdesk.json")]
        config: PathBuf,

        /// Account to sign in with
        #[arg(long)]
        email: String,
    },

    /// Print the student listing
    List {
        /// Path to configuration file
        #[arg(long, default_value = "./rosterdesk.json")]
        config: PathBuf,

        /// Account to sign in with
        #[arg(long)]
        email: String,

        /// Case-insensitive substring matched against every field
        #[arg(long)]
        search: Option<String>,

        /// Column to sort by (e.g. last_name, gpa)
        #[arg(long)]
        sort: Option<String>,

        /// Sort descending
        #[arg(long)]
        desc: bool,
    },

    /// Validate a form read from stdin; no network access
    Validate,

    /// Print the default form for a new student
    Blank,

    /// Add (or with --id, update) the student read from stdin
    Submit {
        /// Path to configuration file
        #[arg(long, default_value = "./rosterdesk.json")]
        config: PathBuf,

        /// Account to sign in with
        #[arg(long)]
        email: String,

        /// Existing record to update
        #[arg(long)]
        id: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_flags() {
        let cli = Cli::try_parse_from([
            "rosterdesk", "list", "--email", "a@b.edu", "--sort", "gpa", "--desc",
        ])
        .unwrap();

        match cli.command {
            Command::List {
                config,
                email,
                search,
                sort,
                desc,
            } => {
                assert_eq!(config, PathBuf::from("./rosterdesk.json"));
                assert_eq!(email, "a@b.edu");
                assert!(search.is_none());
                assert_eq!(sort.as_deref(), Some("gpa"));
                assert!(desc);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_submit_requires_email() {
        assert!(Cli::try_parse_from(["rosterdesk", "submit"]).is_err());
    }

    #[test]
    fn test_validate_takes_no_args() {
        let cli = Cli::try_parse_from(["rosterdesk", "validate"]).unwrap();
        assert!(matches!(cli.command, Command::Validate));
    }
}
