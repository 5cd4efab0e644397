//! Configuration management for tickplot.
//!
//! Loads driver configuration from TOML files: which tick file to chart,
//! aggregation bin size, and output location.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Configuration errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub data: DataConfig,
    pub chart: ChartConfig,
}

impl Config {
    /// Load configuration from a file path.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from default locations.
    ///
    /// Searches in order:
    /// 1. `./tickplot.toml`
    /// 2. `~/.config/tickplot/tickplot.toml`
    ///
    /// Returns default config if no file found.
    pub fn load_default() -> Self {
        if let Ok(config) = Self::load("tickplot.toml") {
            return config;
        }

        if let Some(config_dir) = dirs::config_dir() {
            let config_path = config_dir.join("tickplot").join("tickplot.toml");
            if let Ok(config) = Self::load(&config_path) {
                return config;
            }
        }

        Self::default()
    }

    /// Save configuration to a file path.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Which instrument and date the chart is for.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneralConfig {
    pub contract: String,
    pub date: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            contract: "KODK".to_string(),
            date: "2020-07-29".to_string(),
        }
    }
}

/// Tick input configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    /// Path to the CSV tick file.
    pub ticks_path: PathBuf,
    /// Multiplier applied to raw prices, e.g. 0.01 for cents.
    pub price_scale: f64,
    /// Multiplier applied to raw sizes, e.g. 100 for round lots.
    pub size_scale: f64,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            ticks_path: PathBuf::from("ticks.csv"),
            price_scale: 1.0,
            size_scale: 1.0,
        }
    }
}

/// Chart output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    /// Number of trades per bar.
    pub bin_size: usize,
    /// Output SVG path.
    pub output: PathBuf,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bin_size: 20,
            output: PathBuf::from("chart.svg"),
        }
    }
}
