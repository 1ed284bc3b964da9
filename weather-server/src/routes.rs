//! HTTP surface: `GET /weather` and the static landing page at `GET /`.

use axum::{
    Json, Router,
    extract::{Query, State},
    response::Html,
    routing::get,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use weather_core::{TemperatureUnit, WeatherQuery, WeatherReport, WeatherService};

const INDEX_HTML: &str = include_str!("../static/index.html");

#[derive(Clone)]
pub struct AppState {
    pub service: Arc<WeatherService>,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/weather", get(get_weather))
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Query parameters accepted by `GET /weather`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeatherParams {
    pub city: Option<String>,
    pub country: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
    pub temperature_unit: Option<String>,
}

impl WeatherParams {
    fn into_query(self) -> WeatherQuery {
        let unit = self
            .temperature_unit
            .as_deref()
            .map(TemperatureUnit::from_param)
            .unwrap_or_default();

        WeatherQuery {
            city: self.city,
            country: self.country,
            lat: self.lat,
            lon: self.lon,
            unit,
        }
    }
}

/// Either the merged report or the `{"error": ...}` object. Both are served
/// with status 200; the error string is the whole contract.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum WeatherResponse {
    Report(Box<WeatherReport>),
    Error { error: String },
}

pub async fn get_weather(
    State(state): State<AppState>,
    Query(params): Query<WeatherParams>,
) -> Json<WeatherResponse> {
    let query = params.into_query();

    match state.service.report(&query).await {
        Ok(report) => {
            tracing::info!(
                city = query.city.as_deref().unwrap_or("-"),
                lat = query.lat.as_deref().unwrap_or("-"),
                entries = report.forecast_days.len(),
                "weather lookup ok"
            );
            Json(WeatherResponse::Report(Box::new(report)))
        }
        Err(err) => {
            tracing::warn!(error = %err, "weather lookup failed");
            Json(WeatherResponse::Error { error: err.to_string() })
        }
    }
}
