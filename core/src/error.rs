//! Error types for configuration loading and validation.

use thiserror::Error;

/// Errors that can occur while loading or validating extractor configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// File I/O failure.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// YAML parsing or serialization failure.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Output geometry leaves no room for the definition text.
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// An excluded table name is empty or contains whitespace.
    #[error("invalid table name '{0}': must be non-empty and contain no whitespace")]
    InvalidTableName(String),
}

/// Convenience alias for results with [`ConfigError`].
pub type Result<T> = std::result::Result<T, ConfigError>;
