//! Message Code - recent iMessage history and verification codes
//!
//! A Rust library for reading recent messages from the macOS Messages store
//! and pulling one-time verification codes out of them.
//!
//! # Features
//!
//! - Read-only access to `chat.db`
//! - Body recovery from plain text or serialized rich text
//! - Group chat name resolution
//! - Verification code extraction and clipboard output
//! - TXT, CSV and JSON listings

/// Message body extraction
pub mod body;
/// Group chat name resolution
pub mod chat_names;
/// Clipboard output
pub mod clipboard;
/// Configuration management
pub mod config;
/// Read-only store access
pub mod db;
/// Error types
pub mod error;
/// Logging setup and utilities
pub mod logging;
/// Metrics collection
pub mod metrics;
/// Data models and structures
pub mod models;
/// Listing output
pub mod output;
/// Repository pattern for data access
pub mod repository;
/// Messages store schema definitions
pub mod schema;
/// Read-and-transform pipeline
pub mod service;
/// Store timestamp conversion
pub mod timestamp;
/// Input validation
pub mod validation;
/// Verification code extraction
pub mod verification;

// Re-export key components for easier access
pub use clipboard::{ClipboardSink, CommandClipboard};
pub use config::AppConfig;
pub use error::{MsgCodeError, Result};
pub use models::{ChatMapping, Message, OutputFormat, RawMessageRow, ReadOptions};
pub use repository::{MessageRepository, SqliteRepository};
pub use service::{CopyOutcome, MessageService};
