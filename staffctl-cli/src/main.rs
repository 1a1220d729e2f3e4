//! staffctl CLI - employee record service management
//!
//! Entry point for the staffctl command-line tool:
//! - `serve` runs the employee HTTP API over a SQLite store

use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "staffctl",
    author,
    version,
    about = "Employee record service",
    long_about = "Run and manage the staffctl employee-record service: a REST API \
                  persisting employees to SQLite with field validation and \
                  email-uniqueness enforcement."
)]
struct Cli {
    /// Enable debug logging (same as RUST_LOG=debug)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(commands::serve::ServeArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tracing_setup::init(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve(args) => commands::run_serve(args).await?,
    }
    Ok(())
}
