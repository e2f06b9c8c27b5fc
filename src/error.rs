//! Error types for the msg-code-rust library.
//!
//! Absence of data (null columns, unmatched markers, no digit run) is never
//! an error; these variants cover the failures that stop a run.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur in the msg-code-rust application.
#[derive(Error, Debug)]
pub enum MsgCodeError {
    /// The message store could not be opened
    #[error("Message store unavailable at {path}: {source}")]
    StoreUnavailable {
        /// Path that was passed to the open call
        path: PathBuf,
        /// Underlying SQLite error
        #[source]
        source: rusqlite::Error,
    },

    /// A fixed query could not be executed or a row could not be decoded
    #[error("Query failed: {0}")]
    QueryFailed(#[from] rusqlite::Error),

    /// The clipboard helper could not be spawned, written to, or waited on
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// CSV writer errors
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl MsgCodeError {
    /// Short, stable name of the error kind, used as a metrics label.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::StoreUnavailable { .. } => "store_unavailable",
            Self::QueryFailed(_) => "query_failed",
            Self::Clipboard(_) => "clipboard",
            Self::InvalidConfig(_) => "invalid_config",
            Self::Io(_) => "io",
            Self::Serialization(_) => "serialization",
            Self::Csv(_) => "csv",
        }
    }
}

impl From<config::ConfigError> for MsgCodeError {
    fn from(err: config::ConfigError) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

/// Convenience type alias for Result with `MsgCodeError`
pub type Result<T> = std::result::Result<T, MsgCodeError>;
