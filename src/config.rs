//! Application configuration loaded from environment variables.
//!
//! Configuration is read once at startup in `main` and passed down
//! explicitly; no other component touches the environment. In particular
//! the public base URL used to format display links travels through
//! [`crate::state::AppState`], never through ambient state.
//!
//! ## Required Variables
//!
//! - `DATABASE_URL` - PostgreSQL connection string
//!
//! ## Optional Variables
//!
//! - `BASE_URL`  - Public base for display URLs (default: `http://short.ly`)
//! - `LISTEN`    - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG`  - Log filter (default: `info`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 10)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Public base used to build `{base_url}/{code}` display URLs.
    pub base_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub db_max_connections: u32,
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` is missing.
    pub fn from_env() -> Result<Self> {
        let database_url = env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

        let base_url = env::var("BASE_URL").unwrap_or_else(|_| "http://short.ly".to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            database_url,
            base_url,
            listen_addr,
            log_level,
            db_max_connections,
            db_connect_timeout,
        })
    }
}
