// Rust guideline compliant 2026-10-18

//! Configuration management for buildboard.

use crate::{Error, Result, Tab};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// File name of the configuration inside the data directory.
pub const CONFIG_FILE: &str = "config.toml";

/// Largest accepted search debounce.
pub const MAX_DEBOUNCE_MS: u64 = 10_000;

/// Accepted log levels, most to least severe.
pub const LOG_LEVELS: [&str; 4] = ["error", "warn", "info", "debug"];

/// Output format for command results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// JSON output format.
    Json,
    /// Human-readable table format.
    #[default]
    Table,
}

/// Configuration for buildboard behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Search debounce window in milliseconds.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Tab shown when the dashboard opens.
    #[serde(default)]
    pub default_tab: Tab,

    /// Default output format for commands.
    #[serde(default)]
    pub output_format: OutputFormat,

    /// Log level for the tracing subscriber.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// User that owns documents written by the local front end.
    #[serde(default = "default_user_id")]
    pub user_id: String,
}

fn default_debounce_ms() -> u64 {
    300
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_user_id() -> String {
    "local".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            default_tab: Tab::default(),
            output_format: OutputFormat::default(),
            log_level: default_log_level(),
            user_id: default_user_id(),
        }
    }
}

impl Config {
    /// Loads configuration from file and environment variables.
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values
    /// 2. Configuration file at `<data_dir>/config.toml`
    /// 3. Environment variables with `BUILDBOARD_` prefix
    ///
    /// # Arguments
    ///
    /// * `data_dir` - Path to the data directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Configuration file exists but cannot be read
    /// - Configuration file contains invalid TOML
    /// - Configuration values fail validation
    pub fn load(data_dir: &Path) -> Result<Self> {
        Self::load_with(data_dir, |key| std::env::var(key).ok())
    }

    /// Loads configuration, reading overrides through `lookup` instead of the
    /// process environment.
    ///
    /// # Errors
    ///
    /// Same as [`Config::load`].
    pub fn load_with<F>(data_dir: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        let config_path = data_dir.join(CONFIG_FILE);
        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            config = toml::from_str(&content)
                .map_err(|e| Error::InvalidConfig(format!("Invalid config file: {}", e)))?;
        }

        config.apply_overrides(lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Applies environment overrides.
    ///
    /// Supported variables:
    /// - `BUILDBOARD_DEBOUNCE_MS` - Search debounce in milliseconds
    /// - `BUILDBOARD_DEFAULT_TAB` - builds/resources
    /// - `BUILDBOARD_OUTPUT_FORMAT` - table/json
    /// - `BUILDBOARD_LOG_LEVEL` - error/warn/info/debug
    /// - `BUILDBOARD_USER_ID` - Owning user of local documents
    fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("BUILDBOARD_DEBOUNCE_MS") {
            self.debounce_ms = val.trim().parse().map_err(|_| {
                Error::InvalidConfig("BUILDBOARD_DEBOUNCE_MS must be a number".to_string())
            })?;
        }

        if let Some(val) = lookup("BUILDBOARD_DEFAULT_TAB") {
            self.default_tab = val.parse().map_err(|_| {
                Error::InvalidConfig(
                    "BUILDBOARD_DEFAULT_TAB must be builds or resources".to_string(),
                )
            })?;
        }

        if let Some(val) = lookup("BUILDBOARD_OUTPUT_FORMAT") {
            self.output_format = match val.trim() {
                "json" => OutputFormat::Json,
                "table" => OutputFormat::Table,
                _ => {
                    return Err(Error::InvalidConfig(
                        "BUILDBOARD_OUTPUT_FORMAT must be json or table".to_string(),
                    ))
                }
            };
        }

        if let Some(val) = lookup("BUILDBOARD_LOG_LEVEL") {
            self.log_level = val.trim().to_lowercase();
        }

        if let Some(val) = lookup("BUILDBOARD_USER_ID") {
            self.user_id = val.trim().to_string();
        }

        Ok(())
    }

    /// Validates the configuration values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - debounce_ms exceeds [`MAX_DEBOUNCE_MS`]
    /// - log_level is not one of [`LOG_LEVELS`]
    /// - user_id is empty
    pub fn validate(&self) -> Result<()> {
        if self.debounce_ms > MAX_DEBOUNCE_MS {
            return Err(Error::InvalidConfig(format!(
                "debounce_ms must be at most {}, got {}",
                MAX_DEBOUNCE_MS, self.debounce_ms
            )));
        }

        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(Error::InvalidConfig(format!(
                "log_level must be one of {}, got {}",
                LOG_LEVELS.join(", "),
                self.log_level
            )));
        }

        if self.user_id.trim().is_empty() {
            return Err(Error::InvalidConfig("user_id cannot be empty".to_string()));
        }

        Ok(())
    }

    /// Returns the search debounce window.
    #[must_use]
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    /// Saves the configuration to `<data_dir>/config.toml`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be created or written
    /// - Serialization fails
    pub fn save(&self, data_dir: &Path) -> Result<()> {
        std::fs::create_dir_all(data_dir)?;
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::InvalidConfig(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(data_dir.join(CONFIG_FILE), content)?;
        Ok(())
    }
}
