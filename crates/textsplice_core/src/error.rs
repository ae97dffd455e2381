//! Find-and-replace error types.

use thiserror::Error;

/// Errors that can occur while preparing a find-and-replace run.
///
/// All of these are raised before the tree is touched; matching and
/// splicing themselves cannot fail.
#[derive(Debug, Error)]
pub enum ReplaceError {
    /// The rules are not a recognized shape.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A regular expression failed to compile.
    #[error("Invalid pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// A configuration file could not be read or parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReplaceError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}
