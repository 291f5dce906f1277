use clap::Parser;
use skycast_core::Settings;

use crate::app::App;
use crate::client::ProxyClient;

/// Used when neither the flag nor the settings file name an endpoint.
const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:8787/api/weather";

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "skycast", version, about = "Interactive weather dashboard")]
pub struct Cli {
    /// Proxy endpoint, e.g. "http://127.0.0.1:8787/api/weather".
    /// Overrides the settings file.
    #[arg(long)]
    pub endpoint: Option<String>,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        let settings = Settings::load()?;

        let endpoint = self
            .endpoint
            .or_else(|| settings.endpoint.clone())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());

        let client = ProxyClient::new(endpoint);
        App::new(client, settings).run().await
    }
}
