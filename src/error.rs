//! Error types for quotekeep.
//!
//! This module provides the error taxonomy following the thiserror pattern.
//! Nothing here is fatal to the collection: sync and remote failures degrade
//! to no-ops plus a log line, and only user-facing command errors (bad input,
//! unreadable import files, broken config) surface through these types.

use std::path::PathBuf;

use thiserror::Error;

/// Primary error type for quotekeep operations.
#[derive(Error, Debug)]
pub enum QuoteError {
    /// A required input field was empty.
    #[error("Please fill out both fields: {field} must not be empty")]
    Validation {
        /// Name of the offending field (`text` or `category`).
        field: &'static str,
    },

    /// An imported document could not be parsed as a quote list.
    #[error("Failed to parse quotes: {context}")]
    Parse {
        /// Context describing what was being parsed.
        context: String,
        /// Underlying serde_json error, if available.
        #[source]
        source: Option<serde_json::Error>,
    },

    /// Import file not found.
    #[error("File not found: {path}")]
    FileNotFound {
        /// Path to the missing file.
        path: PathBuf,
    },

    /// I/O error.
    #[error("I/O error: {context}")]
    Io {
        /// Context describing the operation that failed.
        context: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Serialization error.
    #[error("Serialization error: {context}")]
    Serialization {
        /// Context describing the operation that failed.
        context: String,
        /// Underlying serde_json error.
        #[source]
        source: serde_json::Error,
    },

    /// A remote interaction the user explicitly asked to verify failed.
    ///
    /// The fetch/submit degradation paths never construct this; they log and
    /// carry on with an empty result instead.
    #[error("Remote endpoint unreachable: {context}")]
    Transport {
        /// Context describing the failed request.
        context: String,
    },

    /// Invalid configuration.
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Human-readable error message.
        message: String,
    },

    /// The conflict prompt could not be shown or was interrupted.
    #[error("Conflict prompt failed: {message}")]
    Prompt {
        /// Human-readable error message.
        message: String,
    },

    /// Unsupported platform capability.
    #[error("Unsupported: {feature}")]
    Unsupported {
        /// Name of the unsupported feature.
        feature: String,
    },
}

impl QuoteError {
    /// Create a validation error for an empty field.
    #[must_use]
    pub const fn validation(field: &'static str) -> Self {
        Self::Validation { field }
    }

    /// Create a parse error without a source.
    #[must_use]
    pub fn parse(context: impl Into<String>) -> Self {
        Self::Parse {
            context: context.into(),
            source: None,
        }
    }

    /// Create a parse error with the underlying serde error.
    #[must_use]
    pub fn parse_with_source(context: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Parse {
            context: context.into(),
            source: Some(source),
        }
    }

    /// Create a new I/O error with context.
    #[must_use]
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get the process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } => 2,
            Self::Parse { .. } => 3,
            Self::FileNotFound { .. } => 4,
            Self::InvalidConfig { .. } => 5,
            Self::Transport { .. } => 6,
            Self::Io { .. } | Self::Serialization { .. } => 74,
            Self::Prompt { .. } | Self::Unsupported { .. } => 1,
        }
    }
}

/// Result type alias for quotekeep operations.
pub type Result<T> = std::result::Result<T, QuoteError>;

impl From<std::io::Error> for QuoteError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            context: "I/O operation failed".to_string(),
            source: err,
        }
    }
}

impl From<serde_json::Error> for QuoteError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            context: "JSON operation failed".to_string(),
            source: err,
        }
    }
}
