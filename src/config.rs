//! Configuration loaded from environment variables.
//!
//! ## Configuration Methods
//!
//! ### Method 1: Full URL
//!
//! ```bash
//! export DATABASE_URL="sqlite://stations.db"
//! ```
//!
//! ### Method 2: Database path
//!
//! ```bash
//! export DB_PATH="/var/lib/station-registry/stations.db"
//! ```
//!
//! If `DATABASE_URL` is not set, it is constructed from `DB_PATH`
//! (default: `stations.db`).
//!
//! ## Optional Variables
//!
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use anyhow::Result;
use std::env;

/// Registry configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    /// Log level for the consuming application's subscriber setup; the
    /// library itself only emits `tracing` events.
    pub log_level: String,
    /// Log format (`text` or `json`) for the consuming application's
    /// subscriber setup.
    pub log_format: String,

    // ── Pool settings ───────────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let database_url = Self::load_database_url();

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            database_url,
            log_level,
            log_format,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Loads database URL with fallback to path-based configuration.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. Constructed from `DB_PATH` (default: `stations.db`)
    fn load_database_url() -> String {
        if let Ok(url) = env::var("DATABASE_URL") {
            return url;
        }

        let path = env::var("DB_PATH").unwrap_or_else(|_| "stations.db".to_string());
        format!("sqlite://{path}")
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `database_url` does not use the `sqlite:` scheme
    /// - `log_format` is not `text` or `json`
    /// - a pool setting is zero
    pub fn validate(&self) -> Result<()> {
        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Pool size: {}", self.db_max_connections);
    }
}

/// Loads `.env` if present, then loads and validates configuration from the
/// environment.
///
/// # Errors
///
/// Returns an error if validation fails.
pub fn load_from_env() -> Result<Config> {
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
