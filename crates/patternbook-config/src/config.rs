/// Application configuration: load, save, and sanitize.
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Config file name, looked up under the platform config directory.
const CONFIG_FILE_NAME: &str = "patternbook.json";

/// City styles accepted by `city_style`.
///
/// Must list the names of `patternbook_core::Style` in `Style::ALL` order;
/// the binary parses the sanitized value into that enum and its tests check
/// both lists agree.
pub const CITY_STYLES: [&str; 3] = ["Modern", "Medieval", "Futuristic"];

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Max snapshots kept by the editor history (minimum 1).
    pub max_history_depth: usize,
    /// Reject erasing more characters than the text holds instead of clamping.
    pub strict_erase: bool,
    /// Component family for the builder demo.
    pub city_style: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            max_history_depth: 10_000,
            strict_erase: false,
            city_style: "Modern".to_string(),
        }
    }
}

impl AppConfig {
    /// Returns the config file path.
    ///
    /// Resolution order:
    /// 1. `<platform config dir>/patternbook/patternbook.json`
    /// 2. `patternbook.json` in the working directory
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .map(|d| d.join("patternbook").join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Loads config from `path`, creating a default file if it doesn't exist.
    /// Returns defaults on any error (unreadable file, parse error, etc.).
    pub fn load_or_create(path: &Path) -> Self {
        if path.exists() {
            match std::fs::read_to_string(path) {
                Ok(contents) => match serde_json::from_str::<AppConfig>(&contents) {
                    Ok(mut config) => {
                        config.sanitize();
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse config at {}: {e}", path.display());
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read config at {}: {e}", path.display());
                }
            }
            // Don't overwrite a broken file.
            Self::default()
        } else {
            let config = Self::default();
            if let Err(e) = config.save(path) {
                tracing::warn!("Failed to create default config at {}: {e}", path.display());
            }
            config
        }
    }

    /// Saves config to `path` as pretty-printed JSON, creating parent
    /// directories as needed.
    pub fn save(&self, path: &Path) -> Result<(), std::io::Error> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        std::fs::write(path, json)
    }

    /// Clamps values to valid ranges and resets invalid fields.
    pub fn sanitize(&mut self) {
        self.max_history_depth = self.max_history_depth.max(1);

        match CITY_STYLES
            .iter()
            .find(|s| s.eq_ignore_ascii_case(self.city_style.trim()))
        {
            Some(canonical) => self.city_style = canonical.to_string(),
            None => {
                tracing::warn!("Unknown city style {:?}, using Modern", self.city_style);
                self.city_style = "Modern".to_string();
            }
        }
    }
}
