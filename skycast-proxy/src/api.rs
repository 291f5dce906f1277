//! The `/api/weather` endpoint.
//!
//! Validates the query, fans out to the upstream provider, and maps failures
//! to the uniform `{"error": ...}` envelope.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;
use std::sync::Arc;

use skycast_core::{ErrorBody, Location, Units, WeatherError, WeatherQuery, WeatherSource};

/// Fixed message for requests naming neither a city nor coordinates.
const MISSING_LOCATION: &str = "City name or coordinates are required";

/// Shown when the upstream payload yields no message of its own.
const GENERIC_FAILURE: &str = "Failed to fetch weather data";

#[derive(Debug, Deserialize)]
pub struct WeatherParams {
    city: Option<String>,
    lat: Option<f64>,
    lon: Option<f64>,
    units: Option<Units>,
}

/// Resolve the query parameters into a location, or reject the request.
///
/// An empty `city` counts as absent. When both a city and coordinates are
/// supplied the city wins.
fn resolve_location(params: &WeatherParams) -> Option<Location> {
    if let Some(city) = params.city.as_deref().filter(|c| !c.is_empty()) {
        return Some(Location::City(city.to_string()));
    }

    if let (Some(lat), Some(lon)) = (params.lat, params.lon) {
        return Some(Location::Coordinates { lat, lon });
    }

    None
}

async fn get_weather<S: WeatherSource>(
    State(source): State<Arc<S>>,
    Query(params): Query<WeatherParams>,
) -> Response {
    let Some(location) = resolve_location(&params) else {
        return error_response(StatusCode::BAD_REQUEST, MISSING_LOCATION.to_string());
    };

    let query = WeatherQuery {
        location,
        units: params.units.unwrap_or_default(),
    };

    match source.fetch_bundle(&query).await {
        Ok(bundle) => (StatusCode::OK, Json(bundle)).into_response(),
        Err(e) => {
            tracing::error!("Weather lookup failed: {e}");
            let message = match e {
                WeatherError::Upstream(message) => message,
                _ => GENERIC_FAILURE.to_string(),
            };
            error_response(StatusCode::INTERNAL_SERVER_ERROR, message)
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}

/// Build the application router around a weather source.
pub fn router<S: WeatherSource + 'static>(source: Arc<S>) -> Router {
    Router::new()
        .route("/api/weather", get(get_weather::<S>))
        .with_state(source)
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use serde_json::json;
    use skycast_core::WeatherBundle;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug, Default)]
    struct StubSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl WeatherSource for StubSource {
        async fn fetch_bundle(
            &self,
            _query: &WeatherQuery,
        ) -> Result<WeatherBundle, WeatherError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(WeatherBundle {
                current: json!({ "name": "Seoul" }),
                forecast: json!({ "list": [] }),
            })
        }
    }

    fn params(city: Option<&str>, lat: Option<f64>, lon: Option<f64>) -> WeatherParams {
        WeatherParams {
            city: city.map(str::to_string),
            lat,
            lon,
            units: None,
        }
    }

    #[test]
    fn city_wins_over_coordinates() {
        let resolved = resolve_location(&params(Some("Seoul"), Some(1.0), Some(2.0)));
        assert_eq!(resolved, Some(Location::City("Seoul".to_string())));
    }

    #[test]
    fn empty_city_falls_back_to_coordinates() {
        let resolved = resolve_location(&params(Some(""), Some(1.0), Some(2.0)));
        assert_eq!(resolved, Some(Location::Coordinates { lat: 1.0, lon: 2.0 }));
    }

    #[test]
    fn a_lone_latitude_is_not_enough() {
        assert_eq!(resolve_location(&params(None, Some(1.0), None)), None);
        assert_eq!(resolve_location(&params(None, None, None)), None);
    }

    #[tokio::test]
    async fn missing_location_is_rejected_before_any_upstream_call() {
        let source = Arc::new(StubSource::default());

        let response =
            get_weather(State(source.clone()), Query(params(None, None, None))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn a_valid_city_reaches_the_source_exactly_once() {
        let source = Arc::new(StubSource::default());

        let response =
            get_weather(State(source.clone()), Query(params(Some("Seoul"), None, None))).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    }
}
