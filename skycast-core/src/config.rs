use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Stored coordinates used by the client's current-location search.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HomeLocation {
    pub lat: f64,
    pub lon: f64,
}

/// Client settings stored on disk.
///
/// Example TOML:
/// endpoint = "http://127.0.0.1:8787/api/weather"
///
/// [home]
/// lat = 37.5665
/// lon = 126.978
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Optional proxy endpoint override. The `--endpoint` flag wins over it.
    pub endpoint: Option<String>,

    /// Optional home coordinates standing in for a geolocation service.
    pub home: Option<HomeLocation>,
}

impl Settings {
    /// Load settings from disk, or return an empty default if the file
    /// doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no settings file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

        let settings: Settings = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create settings directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize settings to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write settings file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the settings file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}
