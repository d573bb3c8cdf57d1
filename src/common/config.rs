use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global shotsweep configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Retention period used by `add` when --days is not given
    #[serde(default = "default_retention_days")]
    pub default_retention_days: u32,

    /// Output format preference
    #[serde(default)]
    pub output_format: OutputFormat,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
    Quiet,
}

fn default_retention_days() -> u32 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_retention_days: default_retention_days(),
            output_format: OutputFormat::Human,
        }
    }
}

impl Config {
    /// Get the shotsweep data directory (~/.shotsweep, or $SHOTSWEEP_HOME)
    pub fn data_dir() -> PathBuf {
        if let Some(home) = std::env::var_os("SHOTSWEEP_HOME") {
            return PathBuf::from(home);
        }
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("/tmp"))
            .join(".shotsweep")
    }

    /// Get the config file path
    pub fn config_path() -> PathBuf {
        Self::data_dir().join("config.toml")
    }

    /// Get the key-value store directory
    pub fn store_dir() -> PathBuf {
        Self::data_dir().join("store")
    }

    /// Get the folder catalog path
    pub fn catalog_path() -> PathBuf {
        Self::data_dir().join("catalog.json")
    }

    /// Load config from file, or create default if not exists
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config: {}", path.display()))?;
            let config: Config = toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config: {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path();
        let dir = path.parent().unwrap();
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create config dir: {}", dir.display()))?;
        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }

    /// Initialize all shotsweep directories
    pub fn init_dirs() -> Result<()> {
        let dirs = [Self::data_dir(), Self::store_dir()];
        for dir in &dirs {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }
        Ok(())
    }
}
