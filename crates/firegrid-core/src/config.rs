//! Configuration loading and typed config structures for Firegrid.
//!
//! The canonical configuration lives in `firegrid-config.yaml` at the project
//! root. This module defines strongly-typed structs that mirror the YAML
//! structure, and provides a loader that reads the file. Every section is
//! optional; missing keys fall back to the defaults documented on each field.

use std::path::Path;

use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// A value parsed but is outside its allowed range.
    #[error("invalid config value for {field}: {value}")]
    InvalidValue {
        /// Dotted path of the offending key.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// Top-level dashboard configuration.
///
/// Mirrors the structure of `firegrid-config.yaml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DashboardConfig {
    /// Allocation optimizer tuning.
    #[serde(default)]
    pub optimizer: OptimizerConfig,

    /// Nearby-station lookup settings.
    #[serde(default)]
    pub stations: StationsConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Scenario input settings.
    #[serde(default)]
    pub scenario: ScenarioConfig,
}

impl DashboardConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// The `FIREGRID_SCENARIO` environment variable overrides
    /// `scenario.path` when set.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read,
    /// [`ConfigError::Yaml`] if the content is not valid YAML, or
    /// [`ConfigError::InvalidValue`] if a value is out of range.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        let mut config = Self::parse(&contents)?;
        config.scenario.apply_env_overrides();
        Ok(config)
    }

    /// Parse configuration from a YAML string.
    ///
    /// An empty document yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML, or
    /// [`ConfigError::InvalidValue`] if `optimizer.wind_cost_per_mph` is
    /// negative or not finite.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yml::from_str(yaml)?;
        config.optimizer.validate()?;
        Ok(config)
    }
}

/// Allocation optimizer tuning.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OptimizerConfig {
    /// Upper bound on resources a single zone may claim in one pass.
    #[serde(default = "default_max_resources_per_zone")]
    pub max_resources_per_zone: u8,

    /// Edge cost added per mph of wind.
    #[serde(default = "default_wind_cost_per_mph")]
    pub wind_cost_per_mph: f64,
}

impl OptimizerConfig {
    /// Check that edge weights built with these settings stay non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] if `wind_cost_per_mph` is
    /// negative, NaN, or infinite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let value = self.wind_cost_per_mph;
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "optimizer.wind_cost_per_mph",
                value,
            });
        }
        Ok(())
    }
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            max_resources_per_zone: default_max_resources_per_zone(),
            wind_cost_per_mph: default_wind_cost_per_mph(),
        }
    }
}

/// Nearby-station lookup settings.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StationsConfig {
    /// Search radius around each zone, in miles.
    #[serde(default = "default_search_radius_miles")]
    pub search_radius_miles: f64,
}

impl Default for StationsConfig {
    fn default() -> Self {
        Self {
            search_radius_miles: default_search_radius_miles(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error). `RUST_LOG` wins if set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Scenario input settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScenarioConfig {
    /// Path to the scenario YAML, relative to the working directory.
    #[serde(default = "default_scenario_path")]
    pub path: String,
}

impl ScenarioConfig {
    /// Override the scenario path with `FIREGRID_SCENARIO` when set.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("FIREGRID_SCENARIO") {
            self.path = val;
        }
    }
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            path: default_scenario_path(),
        }
    }
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

const fn default_max_resources_per_zone() -> u8 {
    3
}

const fn default_wind_cost_per_mph() -> f64 {
    firegrid_geo::WIND_COST_PER_MPH
}

const fn default_search_radius_miles() -> f64 {
    10.0
}

fn default_log_level() -> String {
    "info".to_owned()
}

fn default_scenario_path() -> String {
    "scenarios/yolo-county.yaml".to_owned()
}
