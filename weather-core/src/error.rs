use thiserror::Error;

/// Failures surfaced to callers of the weather service.
///
/// The display strings are part of the HTTP contract: the server serializes
/// them verbatim into the `{"error": ...}` payload.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("City Not Found")]
    CityNotFound,

    #[error("No forecast data available.")]
    NoForecastData,

    #[error("Please provide either city and country or latitude and longitude.")]
    MissingLocation,

    /// Any other upstream failure, carrying the provider's own message.
    #[error("{0}")]
    Provider(String),

    #[error("Failed to reach the weather provider: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to parse provider response: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_messages_are_verbatim() {
        assert_eq!(WeatherError::CityNotFound.to_string(), "City Not Found");
        assert_eq!(
            WeatherError::NoForecastData.to_string(),
            "No forecast data available."
        );
        assert_eq!(
            WeatherError::MissingLocation.to_string(),
            "Please provide either city and country or latitude and longitude."
        );
        assert_eq!(
            WeatherError::Provider("Nothing to geocode".into()).to_string(),
            "Nothing to geocode"
        );
    }
}
