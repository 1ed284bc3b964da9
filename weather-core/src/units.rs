use serde::{Deserialize, Serialize};

/// Temperature unit requested by the caller.
///
/// The provider always reports Kelvin; `Kelvin` here means "no conversion".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum TemperatureUnit {
    #[default]
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TemperatureUnit {
    /// Parse the `temperatureUnit` query parameter. Anything other than the
    /// two convertible units means Kelvin passthrough.
    pub fn from_param(value: &str) -> Self {
        match value {
            "Celsius" => TemperatureUnit::Celsius,
            "Fahrenheit" => TemperatureUnit::Fahrenheit,
            _ => TemperatureUnit::Kelvin,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "Celsius",
            TemperatureUnit::Fahrenheit => "Fahrenheit",
            TemperatureUnit::Kelvin => "Kelvin",
        }
    }

    /// Convert a Kelvin reading into this unit, rounded to 2 decimals.
    /// Kelvin values pass through untouched.
    pub fn convert_kelvin(&self, kelvin: f64) -> f64 {
        match self {
            TemperatureUnit::Celsius => kelvin_to_celsius(kelvin),
            TemperatureUnit::Fahrenheit => kelvin_to_fahrenheit(kelvin),
            TemperatureUnit::Kelvin => kelvin,
        }
    }
}

impl std::fmt::Display for TemperatureUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn kelvin_to_celsius(kelvin: f64) -> f64 {
    round2(kelvin - 273.15)
}

pub fn kelvin_to_fahrenheit(kelvin: f64) -> f64 {
    round2((kelvin - 273.15) * 9.0 / 5.0 + 32.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

const CARDINAL_DIRECTIONS: [&str; 8] = ["N", "NE", "E", "SE", "S", "SW", "W", "NW"];

/// Map a wind direction in degrees onto one of the 8 compass points.
pub fn cardinal_direction(degrees: f64) -> &'static str {
    let index = ((degrees / 45.0).round() as i64).rem_euclid(8) as usize;
    CARDINAL_DIRECTIONS[index]
}
