//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading or validating PR options.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// An option is missing or malformed.
    #[error("Invalid option '{field}': {message}")]
    ValidationError { field: String, message: String },
}
