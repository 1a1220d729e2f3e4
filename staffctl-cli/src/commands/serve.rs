//! HTTP server command for the staffctl employee API

use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;

use staffctl_server::db::{create_pool, migrations};
use staffctl_server::http::{run_server, ServerConfig};

/// Store used when neither --database-url nor DATABASE_URL is given.
const DEFAULT_DATABASE_URL: &str = "sqlite://employees.db";

/// Arguments for the serve command
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:5000")]
    pub bind: SocketAddr,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    pub cors_permissive: bool,

    /// Database URL (falls back to DATABASE_URL, then a local file)
    #[arg(long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub database_url: String,
}

/// Run the HTTP server
pub async fn run_serve(args: ServeArgs) -> Result<()> {
    tracing::info!("Starting staffctl server on {}", args.bind);

    let pool = create_pool(&args.database_url)
        .await
        .with_context(|| format!("Failed to open employee store at {}", args.database_url))?;

    migrations::run(&pool)
        .await
        .context("Failed to prepare employee store schema")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    // Blocks until shutdown
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
