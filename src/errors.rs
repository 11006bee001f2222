//! Error types for the I/O edges of the crate.
//!
//! The calculators in [`crate::forecast`], [`crate::allocation`] and
//! [`crate::scoring`] are total and never fail. Errors only arise when
//! reading configuration or scripts, or writing rendered output.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mediamix operations
#[derive(Debug, Error)]
pub enum Error {
    /// File system related errors
    #[error("File system error for {path}: {source}")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parse errors
    #[error("Failed to parse {path}: {message}")]
    Toml { path: PathBuf, message: String },

    /// JSON parse errors
    #[error("Failed to parse {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Unknown channel label
    #[error(transparent)]
    UnknownChannel(#[from] crate::core::UnknownChannel),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::FileSystem {
            path: path.into(),
            source,
        }
    }

    pub fn toml(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Toml {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_path() {
        let err = Error::toml("plan.toml", "expected `=`");
        assert_eq!(err.to_string(), "Failed to parse plan.toml: expected `=`");
    }

    #[test]
    fn test_unknown_channel_converts() {
        let err: Error = "radio".parse::<crate::core::Channel>().unwrap_err().into();
        assert!(matches!(err, Error::UnknownChannel(_)));
        assert!(err.to_string().contains("radio"));
    }
}
