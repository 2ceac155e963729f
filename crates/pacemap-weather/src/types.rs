use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Weather condition categories mapped from 7timer codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    #[default]
    Clear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    Snow,
    Sleet,
    Thunderstorm,
}

impl WeatherCondition {
    /// Convert a 7timer civillight weather code to a WeatherCondition
    /// See: https://www.7timer.info/doc.php#civillight
    pub fn from_code(code: &str) -> Self {
        match code {
            "clear" => Self::Clear,
            "pcloudy" => Self::PartlyCloudy,
            "mcloudy" | "cloudy" => Self::Cloudy,
            "humid" => Self::Fog,
            "lightrain" => Self::Drizzle,
            "oshower" | "ishower" | "rain" => Self::Rain,
            "lightsnow" | "snow" => Self::Snow,
            "rainsnow" => Self::Sleet,
            "ts" | "tsrain" => Self::Thunderstorm,
            _ => Self::Clear, // Unknown codes default to clear
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::PartlyCloudy => "Partly Cloudy",
            Self::Cloudy => "Cloudy",
            Self::Fog => "Fog",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Sleet => "Sleet",
            Self::Thunderstorm => "Thunderstorm",
        }
    }
}

/// Geographic location
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// Wire format of the forecast endpoint. Only the fields we read.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ForecastResponse {
    pub dataseries: Vec<ForecastEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ForecastEntry {
    pub weather: String,
    pub temp2m: TemperatureRange,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TemperatureRange {
    pub max: f64,
    pub min: f64,
}

/// Today's summary: the first entry of the forecast series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    /// Raw 7timer code, e.g. "pcloudy"
    pub code: String,
    pub condition: WeatherCondition,
    pub temperature: TemperatureRange,
    pub location: Location,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherReport {
    /// Relative path of the icon image for this report's code
    pub fn icon_path(&self) -> String {
        format!("imgs/icon-{}.png", self.code)
    }

    /// Daytime high, signed ("+12", "0", "-3")
    pub fn day_temperature(&self) -> String {
        signed_temperature(self.temperature.max)
    }

    /// Nighttime low, signed
    pub fn night_temperature(&self) -> String {
        signed_temperature(self.temperature.min)
    }
}

/// Positive temperatures get an explicit `+`; zero and negatives are left alone.
pub fn signed_temperature(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", value)
    } else {
        format!("{}", value)
    }
}

/// Location service errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,
    #[error("Location service unavailable")]
    ServiceUnavailable,
}

/// Weather provider errors
///
/// Display strings are what the weather area shows after a `⚠` prefix.
#[derive(Debug, thiserror::Error)]
pub enum WeatherError {
    #[error("Could not get data: {0}")]
    Network(#[from] reqwest::Error),
    #[error("Something went wrong ({0})")]
    Status(u16),
    #[error("Timed out!")]
    Timeout,
    #[error("Unexpected forecast format: {0}")]
    Parse(String),
    #[error("Forecast is empty")]
    EmptyForecast,
}
