use reqwest::Client;

use skycast_core::{ErrorBody, Location, WeatherBundle, WeatherError, WeatherQuery};

/// HTTP client for the proxy's `/api/weather` endpoint.
#[derive(Debug, Clone)]
pub struct ProxyClient {
    endpoint: String,
    http: Client,
}

impl ProxyClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            endpoint,
            http: Client::new(),
        }
    }

    /// Fetch the combined current+forecast bundle for a query.
    ///
    /// Non-success responses are unwrapped into the proxy's error envelope.
    pub async fn fetch(&self, query: &WeatherQuery) -> Result<WeatherBundle, WeatherError> {
        let mut params: Vec<(&'static str, String)> = match &query.location {
            Location::City(city) => vec![("city", city.clone())],
            Location::Coordinates { lat, lon } => {
                vec![("lat", lat.to_string()), ("lon", lon.to_string())]
            }
        };
        params.push(("units", query.units.as_str().to_string()));

        let res = self.http.get(&self.endpoint).query(&params).send().await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&body)
                .map(|b| b.error)
                .unwrap_or_else(|_| format!("Request failed with status {status}"));
            return Err(WeatherError::Upstream(message));
        }

        Ok(serde_json::from_str(&body)?)
    }
}
