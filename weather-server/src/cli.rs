use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use weather_core::{Config, WeatherService, openweather_provider};

use crate::routes::{self, AppState};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-server", version, about = "Weather query HTTP service")]
pub struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 5000)]
    pub port: u16,

    /// OpenWeatherMap API key; overrides the environment variable and the
    /// config file.
    #[arg(long)]
    pub api_key: Option<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let config = Config::load()?;
        let api_key = config.resolve_api_key(self.api_key.as_deref());

        let service = Arc::new(WeatherService::new(openweather_provider(api_key)));
        let state = AppState { service };

        let addr = format!("{}:{}", self.host, self.port);
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;

        tracing::info!("Listening on http://{addr}");

        axum::serve(listener, routes::router(state))
            .await
            .context("Server error")?;

        Ok(())
    }
}
