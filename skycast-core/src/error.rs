use thiserror::Error;

/// Failure taxonomy shared by the proxy and the client.
///
/// Every failure is terminal for the action that produced it; nothing is
/// retried automatically at either layer.
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Missing or empty user input. No request is made.
    #[error("{0}")]
    Validation(String),

    /// The weather provider (or the proxy) answered with a non-success status.
    #[error("{0}")]
    Upstream(String),

    /// The provider or proxy could not be reached.
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Geolocation is unavailable or was denied. No request is made.
    #[error("{0}")]
    Capability(String),

    /// A payload did not match the expected shape.
    #[error("parse error: {0}")]
    Parse(#[from] serde_json::Error),
}
