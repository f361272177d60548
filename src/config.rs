// src/config.rs
use std::net::SocketAddr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_DATABASE_PATH: &str = "flights.sqlite3";
pub const DEFAULT_SCHEMA_PATH: &str = "sql/schema.sql";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_MAX_WORKERS: usize = 8;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {key}='{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub database_path: String,
    pub schema_path: String,
    pub bind_addr: SocketAddr,
    pub max_workers: usize,
    /// Period of the background status pass; `None` means passes only run on page loads.
    pub status_interval: Option<Duration>,
}

impl Config {
    /// Reads configuration from the process environment (after `.env` is loaded).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_path =
            lookup("DATABASE_PATH").unwrap_or_else(|| DEFAULT_DATABASE_PATH.to_string());
        let schema_path = lookup("SCHEMA_PATH").unwrap_or_else(|| DEFAULT_SCHEMA_PATH.to_string());

        let bind_raw = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr: SocketAddr = bind_raw.parse().map_err(|e: std::net::AddrParseError| {
            ConfigError::Invalid {
                key: "BIND_ADDR",
                value: bind_raw.clone(),
                reason: e.to_string(),
            }
        })?;

        let max_workers = match lookup("MAX_WORKERS") {
            Some(raw) => parse_positive("MAX_WORKERS", &raw)? as usize,
            None => DEFAULT_MAX_WORKERS,
        };

        let status_interval = match lookup("STATUS_INTERVAL_SECS") {
            Some(raw) if !raw.trim().is_empty() => Some(Duration::from_secs(parse_positive(
                "STATUS_INTERVAL_SECS",
                &raw,
            )?)),
            _ => None,
        };

        Ok(Self {
            database_path,
            schema_path,
            bind_addr,
            max_workers,
            status_interval,
        })
    }
}

fn parse_positive(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        key,
        value: raw.to_string(),
        reason,
    };
    let n: u64 = raw.trim().parse().map_err(|e: std::num::ParseIntError| invalid(e.to_string()))?;
    if n == 0 {
        return Err(invalid("must be greater than zero".to_string()));
    }
    Ok(n)
}
