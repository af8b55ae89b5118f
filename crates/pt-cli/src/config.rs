//! Configuration loading and management.

use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use pt_api::CityQuery;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub city: String,
    pub country: String,
    /// Aladhan calculation method ID.
    pub method: u8,
    /// Juristic school for Asr: 0 for Shafi, 1 for Hanafi.
    pub school: u8,
    /// Path to the daily timings cache.
    pub cache_path: PathBuf,
    /// Base URL of the timings API.
    pub api_base_url: String,
}

impl Default for Config {
    fn default() -> Self {
        let cache_dir = dirs_cache_path().unwrap_or_else(|| PathBuf::from("."));
        Self {
            city: String::new(),
            country: String::new(),
            method: 2,
            school: 0,
            cache_path: cache_dir.join("prayer_cache.json"),
            api_base_url: pt_api::DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Loads configuration, optionally from a specific file.
    #[expect(
        clippy::result_large_err,
        reason = "figment::Error is large but only returned at startup"
    )]
    pub fn load_from(config_path: Option<&Path>) -> Result<Self, figment::Error> {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Load from default config location
        if let Some(config_dir) = dirs_config_path() {
            figment = figment.merge(Toml::file(config_dir.join("config.toml")));
        }

        // Load from specified config file
        if let Some(path) = config_path {
            figment = figment.merge(Toml::file(path));
        }

        // Load from environment variables (PT_*)
        figment = figment.merge(Env::prefixed("PT_"));

        figment.extract()
    }

    /// The timings request for the configured location.
    pub fn query(&self) -> CityQuery {
        CityQuery {
            city: self.city.clone(),
            country: self.country.clone(),
            method: self.method,
            school: self.school,
        }
    }
}

/// Returns the platform-specific config directory for pt.
fn dirs_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("pt"))
}

/// Returns the platform-specific cache directory for pt.
///
/// On Linux: `~/.cache/pt`
pub fn dirs_cache_path() -> Option<PathBuf> {
    dirs::cache_dir().map(|p| p.join("pt"))
}
