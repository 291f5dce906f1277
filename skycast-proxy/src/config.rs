use anyhow::{Context, Result};
use std::env;

const API_KEY_VAR: &str = "OPENWEATHER_API_KEY";
const ADDR_VAR: &str = "SKYCAST_ADDR";
const DEFAULT_ADDR: &str = "127.0.0.1:8787";

/// Server configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Upstream credential. Never exposed to callers or written to logs.
    pub api_key: String,

    /// Address the HTTP server binds to.
    pub bind_addr: String,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self> {
        let api_key = env::var(API_KEY_VAR)
            .with_context(|| format!("{API_KEY_VAR} must be set to an OpenWeather API key"))?;

        let bind_addr = env::var(ADDR_VAR).unwrap_or_else(|_| DEFAULT_ADDR.to_string());

        Ok(Self { api_key, bind_addr })
    }
}
