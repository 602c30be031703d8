//! CLI error types

use random_core::{ConfigError, SamplingError};
use thiserror::Error;

/// Errors surfaced by `xrandom` commands
#[derive(Debug, Error)]
pub enum CliError {
    /// A sampling call rejected its arguments
    #[error("Sampling error: {0}")]
    Sampling(#[from] SamplingError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Command line input could not be interpreted
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Result could not be rendered
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

/// Result alias for CLI commands
pub type Result<T> = std::result::Result<T, CliError>;
