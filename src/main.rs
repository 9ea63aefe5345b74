//! todo-server entry point
//!
//! Startup order matters: configuration, pool, schema, then the listener.
//! Any failure before the listener binds exits the process without
//! serving a single request.

use anyhow::{anyhow, Result};
use tracing_subscriber::EnvFilter;

use todo_server::config::AppConfig;
use todo_server::db::{create_pool, migrations};
use todo_server::http::{run_server, ServerConfig};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing()?;

    let config = AppConfig::from_env()?;

    let pool = create_pool(&config.database_url).await?;
    migrations::run(&pool).await?;

    let server_config = ServerConfig {
        bind_addr: config.bind_addr,
        cors_permissive: config.cors_permissive,
    };
    run_server(pool, server_config).await?;

    Ok(())
}

/// Initialize tracing with console output.
///
/// RUST_LOG controls the filter; defaults to info.
fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}
