//! Fixture stores shaped like the Messages `chat.db`.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use rusqlite::{params, Connection};
use tempfile::TempDir;

/// Nanoseconds in one second of store time
pub const NANOS: i64 = 1_000_000_000;

/// A message row to insert into a fixture store
#[derive(Default)]
pub struct FixtureMessage<'a> {
    pub rowid: i64,
    pub date: i64,
    pub text: Option<&'a str>,
    pub attributed_body: Option<&'a [u8]>,
    pub handle_id: i64,
    pub is_from_me: bool,
    pub cache_roomnames: Option<&'a str>,
}

/// Temporary store that is deleted on drop
pub struct FixtureStore {
    _dir: TempDir,
    path: PathBuf,
}

impl FixtureStore {
    /// Create an empty store with the tables the reader touches
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        let path = dir.path().join("chat.db");
        let conn = Connection::open(&path).expect("Failed to create fixture store");
        conn.execute_batch(
            "CREATE TABLE message (
                ROWID INTEGER PRIMARY KEY AUTOINCREMENT,
                date INTEGER,
                text TEXT,
                attributedBody BLOB,
                handle_id INTEGER DEFAULT 0,
                is_from_me INTEGER DEFAULT 0,
                cache_roomnames TEXT
            );
            CREATE TABLE handle (
                ROWID INTEGER PRIMARY KEY AUTOINCREMENT,
                id TEXT NOT NULL
            );
            CREATE TABLE chat (
                ROWID INTEGER PRIMARY KEY AUTOINCREMENT,
                room_name TEXT,
                display_name TEXT
            );",
        )
        .expect("Failed to create fixture schema");
        Self { _dir: dir, path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn connection(&self) -> Connection {
        Connection::open(&self.path).expect("Failed to open fixture store")
    }

    pub fn add_handle(&self, rowid: i64, id: &str) {
        self.connection()
            .execute("INSERT INTO handle (ROWID, id) VALUES (?1, ?2)", params![rowid, id])
            .expect("Failed to insert handle");
    }

    pub fn add_chat(&self, room_name: Option<&str>, display_name: Option<&str>) {
        self.connection()
            .execute(
                "INSERT INTO chat (room_name, display_name) VALUES (?1, ?2)",
                params![room_name, display_name],
            )
            .expect("Failed to insert chat");
    }

    pub fn add_message(&self, message: &FixtureMessage<'_>) {
        self.connection()
            .execute(
                "INSERT INTO message (ROWID, date, text, attributedBody, handle_id, is_from_me, cache_roomnames)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
                params![
                    message.rowid,
                    message.date,
                    message.text,
                    message.attributed_body,
                    message.handle_id,
                    message.is_from_me,
                    message.cache_roomnames
                ],
            )
            .expect("Failed to insert message");
    }

    /// Shorthand for an incoming plain-text message
    pub fn add_text(&self, rowid: i64, date_secs: i64, text: &str) {
        self.add_message(&FixtureMessage {
            rowid,
            date: date_secs * NANOS,
            text: Some(text),
            ..FixtureMessage::default()
        });
    }
}
