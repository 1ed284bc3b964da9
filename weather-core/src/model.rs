use serde::Serialize;

use crate::error::WeatherError;
use crate::units::TemperatureUnit;

/// Incoming query: where to look and in which unit to report.
///
/// Location fields are kept as the raw strings the caller supplied; they are
/// echoed back verbatim in the response payloads.
#[derive(Debug, Clone, Default)]
pub struct WeatherQuery {
    pub city: Option<String>,
    pub country: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub unit: TemperatureUnit,
}

/// A validated location, ready to key a provider request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    Place { city: String, country: String },
    Coordinates { lat: String, lon: String },
}

impl WeatherQuery {
    /// Require either {city, country} or {lat, lon}. City/country wins when
    /// both pairs are present.
    pub fn location(&self) -> Result<Location, WeatherError> {
        fn non_empty(v: &Option<String>) -> Option<&str> {
            v.as_deref().filter(|s| !s.is_empty())
        }

        if let (Some(city), Some(country)) = (non_empty(&self.city), non_empty(&self.country)) {
            return Ok(Location::Place {
                city: city.to_owned(),
                country: country.to_owned(),
            });
        }

        if let (Some(lat), Some(lon)) = (non_empty(&self.lat), non_empty(&self.lon)) {
            return Ok(Location::Coordinates {
                lat: lat.to_owned(),
                lon: lon.to_owned(),
            });
        }

        Err(WeatherError::MissingLocation)
    }
}

impl Location {
    /// Query-string pairs for the OpenWeatherMap endpoints.
    pub fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            Location::Place { city, country } => {
                vec![("q", format!("{city},{country}"))]
            }
            Location::Coordinates { lat, lon } => {
                vec![("lat", lat.clone()), ("lon", lon.clone())]
            }
        }
    }
}

/// Normalized current conditions, serialized with the public payload keys.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrentWeather {
    pub searched_city: Option<String>,
    pub searched_country: Option<String>,
    pub searched_lat: Option<String>,
    pub searched_lon: Option<String>,
    pub current_day: String,
    pub current_date: String,
    pub current_time: String,
    pub sunrise: String,
    pub sunset: String,
    pub wind_speed: f64,
    pub wind_direction: &'static str,
    pub visibility: i64,
    pub current_temperature: f64,
    pub temperature_unit: TemperatureUnit,
    pub current_humidity: u8,
    pub current_pressure: f64,
    pub current_weather_desc: String,
}

/// One future time-slot of the provider's forecast.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastEntry {
    pub searched_city: Option<String>,
    pub searched_country: Option<String>,
    pub searched_lat: Option<String>,
    pub searched_lon: Option<String>,
    pub day: String,
    pub date: String,
    pub time: String,
    pub sunrise: String,
    pub sunset: String,
    pub wind_speed: f64,
    pub wind_direction: &'static str,
    pub visibility: i64,
    pub temperature: f64,
    pub temperature_unit: TemperatureUnit,
    pub humidity: u8,
    #[serde(rename = "weather_description")]
    pub weather_description: String,
}

/// The merged response body: current fields flattened at the top level next
/// to the forecast list.
#[derive(Debug, Clone, Serialize)]
pub struct WeatherReport {
    #[serde(flatten)]
    pub current: CurrentWeather,
    #[serde(rename = "forecastDays")]
    pub forecast_days: Vec<ForecastEntry>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(
        city: Option<&str>,
        country: Option<&str>,
        lat: Option<&str>,
        lon: Option<&str>,
    ) -> WeatherQuery {
        WeatherQuery {
            city: city.map(str::to_owned),
            country: country.map(str::to_owned),
            lat: lat.map(str::to_owned),
            lon: lon.map(str::to_owned),
            unit: TemperatureUnit::Celsius,
        }
    }

    #[test]
    fn city_and_country_resolve_to_place() {
        let loc = query(Some("London"), Some("GB"), None, None).location().unwrap();
        assert_eq!(
            loc,
            Location::Place { city: "London".into(), country: "GB".into() }
        );
        assert_eq!(loc.query_pairs(), vec![("q", "London,GB".to_string())]);
    }

    #[test]
    fn lat_and_lon_resolve_to_coordinates() {
        let loc = query(None, None, Some("51.51"), Some("-0.13")).location().unwrap();
        assert_eq!(
            loc.query_pairs(),
            vec![("lat", "51.51".to_string()), ("lon", "-0.13".to_string())]
        );
    }

    #[test]
    fn missing_location_is_rejected_with_contract_message() {
        for q in [
            query(None, None, None, None),
            query(Some("London"), None, None, None),
            query(None, None, Some("51.51"), None),
            query(Some(""), Some(""), Some(""), Some("")),
        ] {
            let err = q.location().unwrap_err();
            assert_eq!(
                err.to_string(),
                "Please provide either city and country or latitude and longitude."
            );
        }
    }

    #[test]
    fn place_wins_over_coordinates_when_both_given() {
        let loc = query(Some("London"), Some("GB"), Some("51.51"), Some("-0.13"))
            .location()
            .unwrap();
        assert!(matches!(loc, Location::Place { .. }));
    }

    #[test]
    fn report_serializes_with_public_payload_keys() {
        let current = CurrentWeather {
            searched_city: Some("London".into()),
            searched_country: Some("GB".into()),
            searched_lat: None,
            searched_lon: None,
            current_day: "Monday".into(),
            current_date: "24-08-2026".into(),
            current_time: "12:00:00".into(),
            sunrise: "06:01:02".into(),
            sunset: "20:03:04".into(),
            wind_speed: 4.6,
            wind_direction: "SW",
            visibility: 10000,
            current_temperature: 18.25,
            temperature_unit: TemperatureUnit::Celsius,
            current_humidity: 72,
            current_pressure: 1012.0,
            current_weather_desc: "broken clouds".into(),
        };
        let report = WeatherReport { current, forecast_days: vec![] };
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["searchedCity"], "London");
        assert_eq!(json["searchedLat"], serde_json::Value::Null);
        assert_eq!(json["currentTemperature"], 18.25);
        assert_eq!(json["temperatureUnit"], "Celsius");
        assert_eq!(json["currentWeatherDesc"], "broken clouds");
        assert_eq!(json["windDirection"], "SW");
        assert!(json["forecastDays"].as_array().unwrap().is_empty());
    }

    #[test]
    fn forecast_entry_keeps_snake_case_description_key() {
        let entry = ForecastEntry {
            searched_city: None,
            searched_country: None,
            searched_lat: Some("51.51".into()),
            searched_lon: Some("-0.13".into()),
            day: "Tuesday".into(),
            date: "25-08-2026".into(),
            time: "15:00:00".into(),
            sunrise: "05:02:03".into(),
            sunset: "19:04:05".into(),
            wind_speed: 3.1,
            wind_direction: "N",
            visibility: 10000,
            temperature: 290.12,
            temperature_unit: TemperatureUnit::Kelvin,
            humidity: 60,
            weather_description: "light rain".into(),
        };
        let json = serde_json::to_value(&entry).unwrap();

        assert_eq!(json["weather_description"], "light rain");
        assert_eq!(json["windSpeed"], 3.1);
        assert_eq!(json["temperatureUnit"], "Kelvin");
    }
}
