use crate::app::AppState;
use crate::config::Config;
use crate::db::{init_db, Database};
use crate::responses::error_to_response;
use crate::router::handle;
use anyhow::{bail, Context, Result};
use astra::Server;
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

mod app;
mod config;
mod db;
mod domain;
mod engine;
mod errors;
mod responses;
mod router;
mod scheduler;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

#[derive(Parser, Debug)]
#[command(
    name = "flightdeck",
    about = "Flight operations dashboard with automatic flight status updates."
)]
struct Cli {
    /// SQLite database file (overrides DATABASE_PATH)
    #[arg(long)]
    database: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the dashboard (default)
    Serve {
        /// Listen address (overrides BIND_ADDR)
        #[arg(long)]
        bind: Option<std::net::SocketAddr>,
    },
    /// Run a single flight status pass and exit
    UpdateStatuses,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env().context("invalid configuration")?;
    if let Some(path) = cli.database {
        config.database_path = path;
    }

    let db = Database::new(config.database_path.clone());
    init_db(&db, &config.schema_path).context("database initialization failed")?;
    let state = AppState::new(db);

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::UpdateStatuses => update_statuses(&state),
        Command::Serve { bind } => {
            if let Some(addr) = bind {
                config.bind_addr = addr;
            }
            serve(state, &config)
        }
    }
}

fn update_statuses(state: &AppState) -> Result<()> {
    let report = state
        .engine
        .run(&state.db, Utc::now())
        .context("status pass failed")?;

    for failure in &report.failed {
        error!(
            flight_id = failure.flight_id,
            flight_number = %failure.flight_number,
            error = %failure.error,
            "flight not updated"
        );
    }
    if !report.is_clean() {
        bail!(
            "{} flight(s) updated, {} failed",
            report.updated,
            report.failed.len()
        );
    }

    info!(updated = report.updated, "status pass finished");
    Ok(())
}

fn serve(state: AppState, config: &Config) -> Result<()> {
    if let Some(every) = config.status_interval {
        scheduler::spawn_status_scheduler(state.clone(), every)
            .context("failed to start status scheduler")?;
    }

    info!(addr = %config.bind_addr, workers = config.max_workers, "starting server");

    let server = Server::bind(config.bind_addr).max_workers(config.max_workers);

    server
        .serve(move |req, _info| match handle(req, &state) {
            Ok(resp) => resp,
            Err(err) => error_to_response(err),
        })
        .context("server ended with error")?;

    info!("server shut down cleanly");
    Ok(())
}
