use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Upper bound on remembered city names.
const MAX_RECENT: usize = 5;

/// File name of the persisted list under the platform data directory.
const STORE_FILE: &str = "recent_cities.json";

/// Bounded, case-insensitively deduplicated, most-recent-first list of
/// previously searched city names.
///
/// Persisted as a plain JSON array of strings. Loaded once at startup,
/// saved after every successful named search, never expires.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentSearches {
    cities: Vec<String>,
}

impl RecentSearches {
    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Record a successful search: drop any case-insensitive duplicate,
    /// prepend, truncate to the bound.
    pub fn record(&mut self, city: &str) {
        let lower = city.to_lowercase();
        self.cities.retain(|c| c.to_lowercase() != lower);
        self.cities.insert(0, city.to_string());
        self.cities.truncate(MAX_RECENT);
    }

    /// Load the persisted list, or an empty one on first run.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::store_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read recent searches: {}", path.display()))?;

        let list = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse recent searches: {}", path.display()))?;

        Ok(list)
    }

    /// Save the list, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::store_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory: {}", parent.display()))?;
        }

        let json = serde_json::to_string(self).context("Failed to serialize recent searches")?;

        fs::write(path, json)
            .with_context(|| format!("Failed to write recent searches: {}", path.display()))?;

        Ok(())
    }

    fn store_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "skycast", "skycast")
            .ok_or_else(|| anyhow!("Could not determine platform data directory"))?;

        Ok(dirs.data_dir().join(STORE_FILE))
    }
}

/// Normalize a typed city name for display and storage: first character
/// uppercased, the rest lowercased.
pub fn pretty_city_name(city: &str) -> String {
    let mut chars = city.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase(),
        None => String::new(),
    }
}
