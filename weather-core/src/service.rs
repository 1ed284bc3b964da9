use crate::error::WeatherError;
use crate::model::{WeatherQuery, WeatherReport};
use crate::provider::WeatherProvider;

/// Ties the provider calls together into the merged response.
#[derive(Debug)]
pub struct WeatherService {
    provider: Box<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(provider: Box<dyn WeatherProvider>) -> Self {
        Self { provider }
    }

    /// Build the full report: validate the location, fetch current
    /// conditions, then the forecast. Validation failures return before any
    /// outbound call; a current-weather failure skips forecast processing.
    pub async fn report(&self, query: &WeatherQuery) -> Result<WeatherReport, WeatherError> {
        query.location()?;

        let current = self.provider.current(query).await?;
        let forecast_days = self.provider.forecast(query).await?;

        Ok(WeatherReport { current, forecast_days })
    }
}
