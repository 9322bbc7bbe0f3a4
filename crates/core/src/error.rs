//! Error types for Prompt My Papers.
//!
//! `ValidationError` is the only error the prompt core can raise. Everything
//! else (configuration, I/O, serialization) is folded into `AppError`.

use thiserror::Error;

/// Rejection of an essay request before rendering.
///
/// The message is shown to the end user as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// The topic was empty or whitespace-only.
    #[error("Please enter an essay topic first.")]
    EmptyTopic,
}

/// Unified error type for Prompt My Papers.
///
/// All fallible functions in the workspace return `Result<T, AppError>`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O and filesystem errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Request rejected by the validator
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Prompt saving and output errors
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

impl From<serde_yaml::Error> for AppError {
    fn from(err: serde_yaml::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

/// Convenience type alias for Results with AppError.
pub type AppResult<T> = Result<T, AppError>;
