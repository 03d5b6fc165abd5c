//! CLI error types.

use thiserror::Error;

/// Result alias for CLI commands.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the command line.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Config(#[from] combined_lcg::ConfigError),

    #[error("Invalid seed: {0}")]
    Seed(#[from] combined_lcg::StateError),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}
