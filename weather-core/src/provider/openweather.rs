use async_trait::async_trait;
use chrono::{DateTime, Local, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::WeatherError;
use crate::model::{CurrentWeather, ForecastEntry, Location, WeatherQuery};
use crate::units::cardinal_direction;

use super::WeatherProvider;

const CURRENT_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";

/// OpenWeatherMap client. Reports temperatures in Kelvin; conversion happens
/// in the mapping layer according to the requested unit.
#[derive(Debug, Clone)]
pub struct OpenWeatherProvider {
    api_key: String,
    http: Client,
}

impl OpenWeatherProvider {
    pub fn new(api_key: String) -> Self {
        Self {
            api_key,
            http: Client::new(),
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        location: &Location,
    ) -> Result<T, WeatherError> {
        let mut pairs = location.query_pairs();
        pairs.push(("appid", self.api_key.clone()));

        let res = self.http.get(url).query(&pairs).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(upstream_error(status, &body));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherProvider {
    async fn current(&self, query: &WeatherQuery) -> Result<CurrentWeather, WeatherError> {
        let location = query.location()?;
        let raw: OwCurrent = self.get_json(CURRENT_URL, &location).await?;
        Ok(map_current(raw, query, Local::now()))
    }

    async fn forecast(&self, query: &WeatherQuery) -> Result<Vec<ForecastEntry>, WeatherError> {
        let location = query.location()?;
        let raw: OwForecast = self.get_json(FORECAST_URL, &location).await?;
        map_forecast(raw, query, Utc::now())
    }
}

/// Translate an unsuccessful provider response into a domain error.
fn upstream_error(status: StatusCode, body: &str) -> WeatherError {
    if status == StatusCode::NOT_FOUND {
        return WeatherError::CityNotFound;
    }

    let message = serde_json::from_str::<OwErrorBody>(body)
        .ok()
        .and_then(|e| e.message)
        .unwrap_or_else(|| {
            format!(
                "OpenWeather request failed with status {status}: {}",
                truncate_body(body)
            )
        });

    WeatherError::Provider(message)
}

#[derive(Debug, Deserialize)]
struct OwErrorBody {
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OwMain {
    temp: f64,
    humidity: u8,
    #[serde(default)]
    pressure: f64,
}

#[derive(Debug, Deserialize)]
struct OwWeather {
    description: String,
}

#[derive(Debug, Default, Deserialize)]
struct OwWind {
    #[serde(default)]
    speed: f64,
    #[serde(default)]
    deg: f64,
}

#[derive(Debug, Default, Deserialize)]
struct OwSys {
    #[serde(default)]
    sunrise: i64,
    #[serde(default)]
    sunset: i64,
}

#[derive(Debug, Deserialize)]
struct OwCurrent {
    main: OwMain,
    weather: Vec<OwWeather>,
    #[serde(default)]
    wind: OwWind,
    #[serde(default)]
    sys: OwSys,
    #[serde(default)]
    visibility: i64,
}

#[derive(Debug, Deserialize)]
struct OwForecastSlot {
    dt: i64,
    main: OwMain,
    weather: Vec<OwWeather>,
    #[serde(default)]
    wind: OwWind,
    #[serde(default)]
    sys: OwSys,
    #[serde(default)]
    visibility: i64,
}

#[derive(Debug, Deserialize)]
struct OwForecast {
    list: Vec<OwForecastSlot>,
}

fn description(weather: &[OwWeather]) -> String {
    weather
        .first()
        .map(|w| w.description.clone())
        .unwrap_or_else(|| "Unknown".to_string())
}

/// Current-conditions timestamps are rendered in the server's local time.
fn format_unix_local(ts: i64, pattern: &str) -> String {
    DateTime::from_timestamp(ts, 0)
        .unwrap_or_default()
        .with_timezone(&Local)
        .format(pattern)
        .to_string()
}

/// Forecast timestamps stay in UTC, as the provider reports them.
fn format_unix_utc(ts: i64, pattern: &str) -> String {
    DateTime::from_timestamp(ts, 0)
        .unwrap_or_default()
        .format(pattern)
        .to_string()
}

fn map_current(raw: OwCurrent, query: &WeatherQuery, now: DateTime<Local>) -> CurrentWeather {
    CurrentWeather {
        searched_city: query.city.clone(),
        searched_country: query.country.clone(),
        searched_lat: query.lat.clone(),
        searched_lon: query.lon.clone(),
        current_day: now.format("%A").to_string(),
        current_date: now.format("%d-%m-%Y").to_string(),
        current_time: now.format("%H:%M:%S").to_string(),
        sunrise: format_unix_local(raw.sys.sunrise, "%H:%M:%S"),
        sunset: format_unix_local(raw.sys.sunset, "%H:%M:%S"),
        wind_speed: raw.wind.speed,
        wind_direction: cardinal_direction(raw.wind.deg),
        visibility: raw.visibility,
        current_temperature: query.unit.convert_kelvin(raw.main.temp),
        temperature_unit: query.unit,
        current_humidity: raw.main.humidity,
        current_pressure: raw.main.pressure,
        current_weather_desc: description(&raw.weather),
    }
}

fn map_forecast(
    raw: OwForecast,
    query: &WeatherQuery,
    now: DateTime<Utc>,
) -> Result<Vec<ForecastEntry>, WeatherError> {
    if raw.list.is_empty() {
        return Err(WeatherError::NoForecastData);
    }

    let cutoff = now.timestamp();
    let entries = raw
        .list
        .into_iter()
        .filter(|slot| slot.dt >= cutoff)
        .map(|slot| ForecastEntry {
            searched_city: query.city.clone(),
            searched_country: query.country.clone(),
            searched_lat: query.lat.clone(),
            searched_lon: query.lon.clone(),
            day: format_unix_utc(slot.dt, "%A"),
            date: format_unix_utc(slot.dt, "%d-%m-%Y"),
            time: format_unix_utc(slot.dt, "%H:%M:%S"),
            sunrise: format_unix_utc(slot.sys.sunrise, "%H:%M:%S"),
            sunset: format_unix_utc(slot.sys.sunset, "%H:%M:%S"),
            wind_speed: slot.wind.speed,
            wind_direction: cardinal_direction(slot.wind.deg),
            visibility: slot.visibility,
            temperature: query.unit.convert_kelvin(slot.main.temp),
            temperature_unit: query.unit,
            humidity: slot.main.humidity,
            weather_description: description(&slot.weather),
        })
        .collect();

    Ok(entries)
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        format!("{}...", &body[..MAX])
    } else {
        body.to_string()
    }
}
