use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::domain::rules::ClassificationEngine;
use crate::domain::value_objects::{Category, EmptyBatchPolicy, Threshold, TimeUnit};

/// Top-level application configuration loaded from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub notifications: NotificationConfig,
}

/// Classification settings: threshold, unit, empty-batch policy, watch interval.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    #[serde(default = "default_threshold")]
    pub threshold: Threshold,
    #[serde(default)]
    pub unit: TimeUnit,
    #[serde(default)]
    pub reject_empty_batch: bool,
    #[serde(default = "default_interval")]
    pub interval_secs: u64,
}

/// Where records come from: a CSV file, or the synthetic generator when unset.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub csv_path: Option<String>,
    #[serde(default = "default_synthetic_count")]
    pub synthetic_count: usize,
    #[serde(default = "default_region_count")]
    pub region_count: usize,
    #[serde(default = "default_failure_rate")]
    pub failure_rate: f64,
}

/// Notification channels: terminal, desktop, log file, webhook.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationConfig {
    #[serde(default = "default_true")]
    pub terminal: bool,
    #[serde(default)]
    pub desktop: bool,
    #[serde(default)]
    pub log_file: Option<String>,
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default = "default_webhook_min_category")]
    pub webhook_min_category: Category,
}

// --- Defaults ---

const fn default_threshold() -> Threshold {
    Threshold::DEFAULT
}

const fn default_interval() -> u64 {
    10
}

const fn default_synthetic_count() -> usize {
    20
}

const fn default_region_count() -> usize {
    9
}

const fn default_failure_rate() -> f64 {
    0.05
}

const fn default_true() -> bool {
    true
}

const fn default_webhook_min_category() -> Category {
    Category::LongRunning
}

// --- Default impls ---

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            unit: TimeUnit::default(),
            reject_empty_batch: false,
            interval_secs: default_interval(),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            csv_path: None,
            synthetic_count: default_synthetic_count(),
            region_count: default_region_count(),
            failure_rate: default_failure_rate(),
        }
    }
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            terminal: default_true(),
            desktop: false,
            log_file: None,
            webhook_url: None,
            webhook_min_category: default_webhook_min_category(),
        }
    }
}

// --- AppConfig methods ---

impl AppConfig {
    /// Load config from default path or create default config file
    ///
    /// # Errors
    ///
    /// Returns an error if the config directory cannot be determined,
    /// the file cannot be read, or the TOML content is invalid.
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_or_create(&path)
    }

    /// Load from a specific path, or create a default config file if missing
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the TOML content is invalid,
    /// or the default config file cannot be written.
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load_from(path)
        } else {
            let config = Self::default();
            config.save_to(path)?;
            tracing::info!("Default configuration written to {}", path.display());
            Ok(config)
        }
    }

    /// Load from a specific path
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML content is
    /// invalid, including a threshold that is not strictly positive.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).context("Failed to read config file")?;
        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to a specific path, creating parent directories if needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created,
    /// serialization fails, or the file cannot be written.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let parent = path.parent().unwrap_or_else(|| Path::new("."));
        std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        let content = self.to_toml()?;
        std::fs::write(path, content).context("Failed to write config file")?;
        Ok(())
    }

    /// Serialize to pretty TOML
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_toml(&self) -> Result<String> {
        toml::to_string_pretty(self).context("Failed to serialize config")
    }

    /// Default location: `<config dir>/txpulse/config.toml`
    ///
    /// # Errors
    ///
    /// Returns an error if the platform config directory cannot be determined.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;
        Ok(config_dir.join("txpulse").join("config.toml"))
    }

    /// Builds the classification engine from `[general]`
    #[must_use]
    pub fn engine(&self) -> ClassificationEngine {
        ClassificationEngine::new(
            crate::domain::rules::default_rules(),
            self.general.threshold,
            EmptyBatchPolicy::from_reject_flag(self.general.reject_empty_batch),
        )
    }
}
