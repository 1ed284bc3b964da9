use async_trait::async_trait;
use std::fmt::Debug;

use crate::error::WeatherError;
use crate::model::{CurrentWeather, ForecastEntry, WeatherQuery};

pub mod openweather;

/// Abstraction over the upstream weather data source.
///
/// The service only needs the two normalized views; how they are fetched and
/// reshaped is the provider's business.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions for the queried location.
    async fn current(&self, query: &WeatherQuery) -> Result<CurrentWeather, WeatherError>;

    /// Future forecast entries for the queried location, chronological,
    /// past time-slots already filtered out.
    async fn forecast(&self, query: &WeatherQuery) -> Result<Vec<ForecastEntry>, WeatherError>;
}

/// Construct the default provider with the given API key.
pub fn openweather_provider(api_key: String) -> Box<dyn WeatherProvider> {
    Box::new(openweather::OpenWeatherProvider::new(api_key))
}
