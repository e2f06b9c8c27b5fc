//! Data models for message handling
//!
//! Everything here is transient: rows are read, transformed and dropped
//! within one invocation.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MsgCodeError;

/// A raw row as returned by the message query, before any decoding
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawMessageRow {
    /// Store-native primary key
    pub row_id: i64,
    /// Store-native timestamp (nanoseconds since 2001-01-01 local time)
    pub date: i64,
    /// Plain-text body, if stored
    pub text: Option<String>,
    /// Serialized rich-text payload, if stored
    pub attributed_body: Option<Vec<u8>>,
    /// Sender handle (phone number or email)
    pub handle: Option<String>,
    /// True if the message was sent by the current user
    pub is_from_me: bool,
    /// Group chat room key
    pub cache_roomnames: Option<String>,
}

/// A decoded message ready for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Message {
    /// Store-native primary key
    #[serde(rename = "RowID")]
    pub row_id: i64,
    /// Local time formatted as `YYYY-MM-DD HH:MM:SS`
    pub date: String,
    /// Derived message body
    pub body: String,
    /// Sender handle, or the self label for outgoing messages without one
    pub phone_number: String,
    /// True if the message was sent by the current user
    pub is_from_me: bool,
    /// Raw group chat room key, possibly empty
    pub cache_roomname: String,
    /// Resolved group chat display name, possibly empty
    pub group_chat_name: String,
}

/// Room key to display name lookup, loaded once per invocation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatMapping {
    names: HashMap<String, String>,
}

impl ChatMapping {
    /// Build a mapping from `(room_key, display_name)` pairs.
    ///
    /// Keys are compared case-sensitively. When a key repeats, the last
    /// pair wins.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let names = pairs
            .into_iter()
            .map(|(key, name)| (key.into(), name.into()))
            .collect();
        Self { names }
    }

    /// Insert or replace a single entry
    pub fn insert(&mut self, room_key: impl Into<String>, display_name: impl Into<String>) {
        self.names.insert(room_key.into(), display_name.into());
    }

    /// Display name for `room_key`, or `None` when unknown
    #[must_use]
    pub fn get(&self, room_key: &str) -> Option<&str> {
        self.names.get(room_key).map(String::as_str)
    }

    /// Number of known rooms
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True if no rooms are known
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Options that shape how rows become messages
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReadOptions {
    /// Maximum number of rows, newest first; 0 reads everything
    pub limit: usize,
    /// Label used as the sender of outgoing messages with no handle
    pub self_label: String,
    /// Prepend the formatted date to each body
    pub human_readable: bool,
}

impl ReadOptions {
    /// Options for reading only the newest message
    #[must_use]
    pub fn newest() -> Self {
        Self {
            limit: 1,
            ..Self::default()
        }
    }
}

/// Output format for listed messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Labeled text blocks
    #[default]
    Txt,
    /// Comma-separated values format
    Csv,
    /// JSON format
    Json,
}

impl OutputFormat {
    /// All accepted format names
    pub const NAMES: [&'static str; 3] = ["txt", "csv", "json"];
}

impl FromStr for OutputFormat {
    type Err = MsgCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "txt" => Ok(Self::Txt),
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(MsgCodeError::InvalidConfig(format!(
                "Invalid output format: {other}. Must be one of: {:?}",
                Self::NAMES
            ))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Txt => "txt",
            Self::Csv => "csv",
            Self::Json => "json",
        };
        f.write_str(name)
    }
}
