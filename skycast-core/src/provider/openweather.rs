use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use crate::{
    error::WeatherError,
    model::{Location, WeatherBundle, WeatherQuery},
};

use super::WeatherSource;

const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Fixed response-language preference forwarded with every request.
const LANG: &str = "kr";

const WEATHER_PATH: &str = "weather";
const FORECAST_PATH: &str = "forecast";

/// Client for the OpenWeather REST API.
///
/// Issues the current-weather and 5-day-forecast requests together and only
/// yields a bundle when both succeed.
#[derive(Debug, Clone)]
pub struct OpenWeatherClient {
    api_key: String,
    base_url: String,
    http: Client,
}

impl OpenWeatherClient {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Point the client at a different API root. Used by tests.
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            api_key,
            base_url,
            http: Client::new(),
        }
    }

    async fn fetch_endpoint(
        &self,
        path: &'static str,
        query: &WeatherQuery,
    ) -> Result<Value, WeatherError> {
        let url = format!("{}/{}", self.base_url, path);

        let mut params = location_params(&query.location);
        params.push(("appid", self.api_key.clone()));
        params.push(("units", query.units.as_str().to_string()));
        params.push(("lang", LANG.to_string()));

        tracing::debug!("Requesting OpenWeather /{path}");

        let res = self.http.get(&url).query(&params).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(WeatherError::Upstream(upstream_message(path, status, &body)));
        }

        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl WeatherSource for OpenWeatherClient {
    async fn fetch_bundle(&self, query: &WeatherQuery) -> Result<WeatherBundle, WeatherError> {
        let (current, forecast) = tokio::join!(
            self.fetch_endpoint(WEATHER_PATH, query),
            self.fetch_endpoint(FORECAST_PATH, query),
        );

        Ok(WeatherBundle {
            current: current?,
            forecast: forecast?,
        })
    }
}

fn location_params(location: &Location) -> Vec<(&'static str, String)> {
    match location {
        Location::City(city) => vec![("q", city.clone())],
        Location::Coordinates { lat, lon } => {
            vec![("lat", lat.to_string()), ("lon", lon.to_string())]
        }
    }
}

/// Derive an error message from an upstream failure payload, preferring the
/// provider's own `message` field when it is present.
fn upstream_message(path: &str, status: StatusCode, body: &str) -> String {
    let label = if path == FORECAST_PATH { "Forecast" } else { "Weather" };

    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|v| v.get("message").and_then(Value::as_str).map(str::to_string))
        .map_or_else(
            || format!("{label} API request failed with status {status}"),
            |message| format!("{label} API Error: {message}"),
        )
}
