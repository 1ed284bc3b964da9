//! Binary crate for the weather query HTTP service.
//!
//! This crate focuses on:
//! - Parsing CLI arguments (bind address, API-key override)
//! - Wiring the axum router to the core service
//! - Logging setup

use clap::Parser;

mod cli;
mod routes;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cmd = cli::Cli::parse();
    cmd.run().await
}
