//! Process configuration, loaded once at startup
//!
//! One required setting: DATABASE_URL. Values come from the environment,
//! with a local `.env` file as fallback. The loaded config is passed into
//! the storage and HTTP layers explicitly; nothing reads the environment
//! after startup.

use std::net::SocketAddr;

use anyhow::{Context, Result};

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SQLite connection string, e.g. `sqlite://todos.db`
    pub database_url: String,

    /// Address the HTTP server binds to
    pub bind_addr: SocketAddr,

    /// Allow any CORS origin (development only)
    pub cors_permissive: bool,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// Reads a `.env` file first if one exists; real environment
    /// variables take precedence over it.
    ///
    /// # Environment variables
    ///
    /// * `DATABASE_URL` - required
    /// * `BIND_ADDR` - optional, default `127.0.0.1:3030`
    /// * `CORS_PERMISSIVE` - optional, set to `1` or `true` to enable
    pub fn from_env() -> Result<Self> {
        // A missing .env file is fine; env vars alone are enough
        dotenvy::dotenv().ok();

        let database_url = std::env::var("DATABASE_URL")
            .context("DATABASE_URL must be set (environment or .env file)")?;

        let bind_addr = match std::env::var("BIND_ADDR") {
            Ok(raw) => raw
                .parse()
                .context("BIND_ADDR is not a valid socket address")?,
            Err(_) => SocketAddr::from(([127, 0, 0, 1], 3030)),
        };

        let cors_permissive = std::env::var("CORS_PERMISSIVE")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Ok(Self {
            database_url,
            bind_addr,
            cors_permissive,
        })
    }
}
