//! Core library for the weather query service.
//!
//! This crate defines:
//! - Configuration & API-key resolution
//! - Abstraction over the upstream weather provider
//! - Shared domain models (queries, normalized payloads)
//! - Unit conversion & wind-direction helpers
//!
//! It is used by `weather-server`, but can also be reused by other binaries.

pub mod config;
pub mod error;
pub mod model;
pub mod provider;
pub mod service;
pub mod units;

pub use config::Config;
pub use error::WeatherError;
pub use model::{CurrentWeather, ForecastEntry, Location, WeatherQuery, WeatherReport};
pub use provider::{WeatherProvider, openweather_provider};
pub use service::WeatherService;
pub use units::TemperatureUnit;
