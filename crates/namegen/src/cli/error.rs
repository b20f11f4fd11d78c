//! Error types for the name generator CLI.

use std::io;

use thiserror::Error;

use crate::error::GenerationError;

/// Errors surfaced while resolving a profile and printing names.
#[derive(Debug, Error)]
pub enum CliError {
    /// Neither the requested profile nor the fallback is registered.
    #[error("profile '{requested}' not found and fallback profile '{fallback}' is unavailable")]
    FallbackUnavailable {
        /// Profile that was requested.
        requested: String,
        /// Fallback profile that was also missing.
        fallback: String,
    },
    /// The profile failed to generate a name.
    #[error(transparent)]
    Generation(#[from] GenerationError),
    /// Writing to the output stream failed.
    #[error("failed to write output: {source}")]
    Output {
        /// Underlying I/O error.
        #[from]
        source: io::Error,
    },
    /// The development-mode configuration dump could not be serialised.
    #[error("failed to serialise configuration: {source}")]
    ConfigDump {
        /// Underlying serialisation error.
        #[from]
        source: serde_json::Error,
    },
}
