//! CLI error types

use sampler_core::types::CdfError;
use thiserror::Error;

/// Errors surfaced by the `invcdf` binary.
#[derive(Error, Debug)]
pub enum CliError {
    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Argument combination or value rejected
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Configuration file or environment override rejected
    #[error("Configuration error: {0}")]
    Config(String),

    /// Building the inverse CDF failed
    #[error(transparent)]
    Sampler(#[from] CdfError),

    /// Rendering results failed
    #[error("Output error: {0}")]
    Output(String),

    /// A self-check found a broken inverse CDF
    #[error("Check failed: {0}")]
    CheckFailed(String),
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
