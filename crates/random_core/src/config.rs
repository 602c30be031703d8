//! Module configuration management
//!
//! Handles loading configuration from environment variables and TOML files.
//! A fixed `seed` makes the default source of every module instance
//! reproducible, which is mainly useful for tests and replaying a run.

use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable holding the default-source seed.
pub const ENV_SEED: &str = "XRANDOM_SEED";

/// Environment variable holding the log level.
pub const ENV_LOG_LEVEL: &str = "XRANDOM_LOG_LEVEL";

/// Configuration error types
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Seed is not a 64-bit signed integer.
    #[error("Invalid seed: {0}. Must be a 64-bit signed integer")]
    InvalidSeed(String),

    /// Unknown log level name.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// Configuration file could not be read.
    #[error("Configuration file error: {0}")]
    FileError(String),

    /// Configuration file is not valid TOML for [`ModuleConfig`].
    #[error("Configuration parse error: {0}")]
    ParseError(String),
}

/// Log levels supported by the host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Most verbose, includes per-generator seeding.
    Trace,
    /// Debug output.
    Debug,
    /// Default level.
    #[default]
    Info,
    /// Warnings only.
    Warn,
    /// Errors only.
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Module configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ModuleConfig {
    /// Seed for the default source; time-derived when absent
    pub seed: Option<i64>,
    /// Log level for the host's subscriber
    pub log_level: LogLevel,
}

impl ModuleConfig {
    /// Create a new ModuleConfig with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a fixed seed for the default source
    pub fn with_seed(mut self, seed: i64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::default().apply_env(|key| std::env::var(key).ok())
    }

    /// Override fields from variables returned by `lookup`
    ///
    /// `lookup` maps a variable name to its value; [`ModuleConfig::from_env`]
    /// passes the process environment.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(parse_seed(&seed)?);
        }

        if let Some(level) = lookup(ENV_LOG_LEVEL) {
            self.log_level = LogLevel::from_str(&level)?;
        }

        Ok(self)
    }

    /// Parse configuration from a TOML document
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileError(format!("{}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }
}

/// Parse a seed as written by a user, e.g. in an environment variable
pub fn parse_seed(value: &str) -> Result<i64, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidSeed(value.to_string()))
}
