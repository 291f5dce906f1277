use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::WeatherError;

/// Forecast entries carrying this timestamp text represent the daily slot.
const DAILY_SLOT: &str = "06:00:00";

/// Unit system requested from the provider and used for display suffixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    #[default]
    Metric,
    Imperial,
}

impl Units {
    pub fn as_str(&self) -> &'static str {
        match self {
            Units::Metric => "metric",
            Units::Imperial => "imperial",
        }
    }

    /// The other unit system.
    pub fn toggled(self) -> Self {
        match self {
            Units::Metric => Units::Imperial,
            Units::Imperial => Units::Metric,
        }
    }
}

/// Where to look the weather up: a city name or explicit coordinates.
#[derive(Debug, Clone, PartialEq)]
pub enum Location {
    City(String),
    Coordinates { lat: f64, lon: f64 },
}

/// A single lookup, as sent to the proxy and forwarded upstream.
#[derive(Debug, Clone)]
pub struct WeatherQuery {
    pub location: Location,
    pub units: Units,
}

/// The combined response body: both provider payloads under fixed keys,
/// passed through unmodified.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherBundle {
    pub current: Value,
    pub forecast: Value,
}

impl WeatherBundle {
    /// Typed view of the current-conditions payload.
    pub fn current_weather(&self) -> Result<CurrentWeather, WeatherError> {
        Ok(serde_json::from_value(self.current.clone())?)
    }

    /// Typed view of the 5-day/3-hour forecast payload.
    pub fn forecast(&self) -> Result<Forecast, WeatherError> {
        Ok(serde_json::from_value(self.forecast.clone())?)
    }
}

/// Uniform failure envelope returned by the proxy.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Current conditions, as the provider reports them. Fields the UI does not
/// render are left in the raw payload.
#[derive(Debug, Clone, Deserialize)]
pub struct CurrentWeather {
    pub name: String,
    pub dt: i64,
    pub main: MainMetrics,
    pub weather: Vec<ConditionInfo>,
    pub wind: Wind,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MainMetrics {
    pub temp: f64,
    pub humidity: u8,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ConditionInfo {
    pub description: String,
    pub icon: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Wind {
    pub speed: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Forecast {
    pub list: Vec<ForecastEntry>,
}

/// One 3-hour forecast slot.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastEntry {
    pub dt: i64,
    pub dt_txt: String,
    pub main: MainMetrics,
    pub weather: Vec<ConditionInfo>,
}

impl Forecast {
    /// One entry per day: the 06:00 slot of the 3-hour list, in input order.
    pub fn daily_entries(&self) -> Vec<&ForecastEntry> {
        self.list.iter().filter(|e| e.dt_txt.contains(DAILY_SLOT)).collect()
    }
}
