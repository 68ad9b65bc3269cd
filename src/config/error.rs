//! Config error types.

use crate::builder::BuildError;
use thiserror::Error;

/// Errors that can occur while loading a machine definition
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The JSON was malformed or did not match the expected shape
    #[error("Failed to parse machine config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The definition parsed but could not be turned into a machine
    #[error("Failed to build machine from config: {0}")]
    Build(#[from] BuildError),
}
