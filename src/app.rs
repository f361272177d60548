// src/app.rs
use crate::db::Database;
use crate::engine::StatusEngine;
use std::sync::Arc;

/// Shared by every request handler and the scheduler.
#[derive(Clone, Debug)]
pub struct AppState {
    pub db: Database,
    pub engine: Arc<StatusEngine>,
}

impl AppState {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            engine: Arc::new(StatusEngine::new()),
        }
    }
}
