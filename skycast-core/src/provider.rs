use crate::{WeatherBundle, WeatherError, WeatherQuery};
use async_trait::async_trait;
use std::fmt::Debug;

pub mod openweather;

/// A source of combined current+forecast weather data.
///
/// The proxy's request handler is generic over this seam, so it can be
/// exercised against a stub source in tests.
#[async_trait]
pub trait WeatherSource: Send + Sync + Debug {
    async fn fetch_bundle(&self, query: &WeatherQuery) -> Result<WeatherBundle, WeatherError>;
}
