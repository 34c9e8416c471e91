//! Error types for the crate.
//!
//! The composition and interpolation functions are total and never fail;
//! errors only arise at the edges (configuration loading, custom group
//! registration, environment initialisation).

use thiserror::Error;

/// Crate error type.
#[derive(Error, Debug)]
pub enum Error {
    /// Layered configuration could not be built or deserialized.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// JSON class input could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A custom utility group definition is unusable.
    #[error("Invalid class group `{name}`: {reason}")]
    InvalidGroup {
        /// Group name as supplied by the caller.
        name: String,
        /// Why the definition was rejected.
        reason: &'static str,
    },

    /// The environment flag was already read or set.
    #[error("Environment flag already initialized")]
    EnvironmentInitialized,
}

/// Result type alias for fallible crate operations.
pub type Result<T> = std::result::Result<T, Error>;
