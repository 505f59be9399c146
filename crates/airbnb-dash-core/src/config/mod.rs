//! Configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::dashboard::{View, DEFAULT_TOP_N};
use crate::error::{Error, Result};

/// Default dataset file name, looked up in the working directory
pub const DEFAULT_DATASET: &str = "airbnb_data.csv";

/// Configuration for airbnb-dash
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path to the listings CSV
    pub dataset_path: Option<PathBuf>,
    /// Color theme for the terminal UI
    pub theme: ThemeName,
    /// View shown on startup
    pub default_view: View,
    /// Number of groups kept by ranking charts
    pub top_n: usize,
}

/// Named color themes
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum ThemeName {
    #[default]
    Default,
    Ocean,
    Monochrome,
}

impl ThemeName {
    /// Next theme in cycling order
    pub fn next(&self) -> Self {
        match self {
            ThemeName::Default => ThemeName::Ocean,
            ThemeName::Ocean => ThemeName::Monochrome,
            ThemeName::Monochrome => ThemeName::Default,
        }
    }
}

impl std::fmt::Display for ThemeName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeName::Default => write!(f, "Default"),
            ThemeName::Ocean => write!(f, "Ocean"),
            ThemeName::Monochrome => write!(f, "Monochrome"),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            dataset_path: None,
            theme: ThemeName::Default,
            default_view: View::Home,
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl Config {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("airbnb-dash").join("config.json"))
    }

    /// Load config from disk, falling back to defaults if missing or malformed
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path).unwrap_or_else(|e| {
                tracing::debug!("Using default config: {}", e);
                Self::default()
            }),
            None => Self::default(),
        }
    }

    /// Load config from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        match Self::config_path() {
            Some(path) => self.save_to(&path),
            None => Err(Error::Config("No config directory on this platform".to_string())),
        }
    }

    /// Save config to a specific file, creating parent directories
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Dataset to open: the configured path or the default file name
    pub fn dataset_path(&self) -> PathBuf {
        self.dataset_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATASET))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_through_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            dataset_path: Some(PathBuf::from("/data/listings.csv")),
            theme: ThemeName::Ocean,
            default_view: View::Analysis,
            top_n: 5,
        };
        config.save_to(&path).unwrap();

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "theme": "Monochrome" }"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.theme, ThemeName::Monochrome);
        assert_eq!(config.top_n, DEFAULT_TOP_N);
        assert_eq!(config.default_view, View::Home);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "not json").unwrap();
        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }

    #[test]
    fn test_dataset_path_default() {
        assert_eq!(Config::default().dataset_path(), PathBuf::from(DEFAULT_DATASET));
    }

    #[test]
    fn test_theme_cycle() {
        assert_eq!(ThemeName::Default.next(), ThemeName::Ocean);
        assert_eq!(ThemeName::Monochrome.next(), ThemeName::Default);
    }
}
