// src/scheduler.rs
use crate::app::AppState;
use chrono::Utc;
use std::thread::{self, JoinHandle};
use std::time::Duration;
use tracing::{info, warn};

/// Runs a status pass every `every`, on its own thread, for the life of the process.
pub fn spawn_status_scheduler(state: AppState, every: Duration) -> std::io::Result<JoinHandle<()>> {
    thread::Builder::new()
        .name("status-scheduler".into())
        .spawn(move || {
            info!(interval_secs = every.as_secs(), "status scheduler started");
            loop {
                if let Err(e) = state.engine.run(&state.db, Utc::now()) {
                    warn!(error = %e, "scheduled status pass failed");
                }
                thread::sleep(every);
            }
        })
}
