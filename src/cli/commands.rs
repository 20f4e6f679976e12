//! CLI command implementations
//!
//! Network commands load the configuration, build the REST-backed
//! dashboard, sign in, run one action, and print one JSON line.

use std::env;
use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use serde_json::{json, Value};
use tracing::info;

use crate::auth::{RestAuthProvider, SessionCell};
use crate::config::{DeskConfig, PASSWORD_ENV};
use crate::dashboard::{Clock, Dashboard, SystemClock};
use crate::http_server::HttpServer;
use crate::observability::{init_logging, Event};
use crate::roster::{RosterQuery, SortDirection, SortField, SortSpec};
use crate::store::RestStudentStore;
use crate::student::{StudentForm, StudentId, StudentValidator};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::{read_request, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve { config } => serve(&config),
        Command::Overview { config, email } => overview(&config, &email),
        Command::List {
            config,
            email,
            search,
            sort,
            desc,
        } => {
            let query = list_query(search, sort.as_deref(), desc)?;
            list(&config, &email, &query)
        }
        Command::Validate => write_response(validate_form(read_form()?)?),
        Command::Blank => write_response(blank_form(&SystemClock)?),
        Command::Submit { config, email, id } => {
            submit(&config, &email, read_form()?, id.map(StudentId::new))
        }
    }
}

/// Start the HTTP server for the dashboard
pub fn serve(config_path: &Path) -> CliResult<()> {
    let config = load_config(config_path)?;
    let dashboard = build_dashboard(&config)?;
    let server = HttpServer::new(config.http.clone(), Arc::new(dashboard));

    block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::boot_failed(format!("HTTP server failed: {}", e)))
    })
}

pub fn overview(config_path: &Path, email: &str) -> CliResult<()> {
    let config = load_config(config_path)?;
    let dashboard = build_dashboard(&config)?;

    let overview = block_on(async {
        sign_in(&dashboard, email).await?;
        Ok(dashboard.overview().await?)
    })?;

    write_response(json!({
        "overview": overview,
        "averageGpaDisplay": overview.average_gpa_display(),
    }))
}

pub fn list(config_path: &Path, email: &str, query: &RosterQuery) -> CliResult<()> {
    let config = load_config(config_path)?;
    let dashboard = build_dashboard(&config)?;

    let rows = block_on(async {
        sign_in(&dashboard, email).await?;
        Ok(dashboard.list(query).await?)
    })?;

    write_response(json!({ "count": rows.len(), "students": rows }))
}

pub fn submit(
    config_path: &Path,
    email: &str,
    form: StudentForm,
    id: Option<StudentId>,
) -> CliResult<()> {
    let config = load_config(config_path)?;
    let dashboard = build_dashboard(&config)?;

    let outcome = block_on(async {
        sign_in(&dashboard, email).await?;
        Ok(dashboard.submit(&form, id).await?)
    })?;

    write_response(serde_json::to_value(&outcome)?)
}

/// Normalized profile for a valid form
pub fn validate_form(form: StudentForm) -> CliResult<Value> {
    let profile = StudentValidator::new()
        .validate(&form)
        .map_err(crate::dashboard::DashboardError::Validation)?;
    Ok(serde_json::to_value(profile)?)
}

/// The default draft for a new student
pub fn blank_form(clock: &dyn Clock) -> CliResult<Value> {
    Ok(StudentForm::blank(clock.today()).to_json())
}

/// Builds a listing query from CLI flags
pub fn list_query(search: Option<String>, sort: Option<&str>, desc: bool) -> CliResult<RosterQuery> {
    let field = match sort {
        Some(name) => name.parse::<SortField>()?,
        None => SortSpec::default().field,
    };
    let direction = if desc {
        SortDirection::Desc
    } else {
        SortDirection::Asc
    };
    Ok(RosterQuery::new(
        search.unwrap_or_default(),
        SortSpec { field, direction },
    ))
}

fn read_form() -> CliResult<StudentForm> {
    Ok(serde_json::from_value(read_request()?)?)
}

fn load_config(path: &Path) -> CliResult<DeskConfig> {
    let config = DeskConfig::load(path)?;
    init_logging(&config.log_filter);
    info!(event = %Event::ConfigLoaded, path = %path.display(), backend = %config.backend.url, "configuration loaded");
    Ok(config)
}

/// REST-backed dashboard sharing one session between auth and store
fn build_dashboard(config: &DeskConfig) -> CliResult<Dashboard> {
    info!(event = %Event::BootStart, "building dashboard");
    let session = SessionCell::new();
    let auth = RestAuthProvider::new(&config.backend, session.clone())
        .map_err(|e| CliError::boot_failed(format!("HTTP client: {}", e)))?;
    let store = RestStudentStore::new(&config.backend, session)
        .map_err(|e| CliError::boot_failed(format!("HTTP client: {}", e)))?;
    Ok(Dashboard::new(Arc::new(store), Arc::new(auth)))
}

async fn sign_in(dashboard: &Dashboard, email: &str) -> CliResult<()> {
    let password = env::var(PASSWORD_ENV)
        .map_err(|_| CliError::auth_failed(format!("{} is not set", PASSWORD_ENV)))?;
    dashboard.sign_in(email, &password).await?;
    Ok(())
}

fn block_on<T>(future: impl Future<Output = CliResult<T>>) -> CliResult<T> {
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::boot_failed(format!("Failed to create tokio runtime: {}", e)))?;
    rt.block_on(future)
}
