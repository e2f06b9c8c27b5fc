use std::path::Path;

use crate::db::Database;
use crate::error::Result;
use crate::models::{ChatMapping, RawMessageRow};

/// Source of raw message rows and chat names
#[cfg_attr(test, mockall::automock)]
pub trait MessageRepository {
    /// Newest `limit` rows, newest first; every row when `limit` is 0
    fn fetch_rows(&self, limit: usize) -> Result<Vec<RawMessageRow>>;
    /// Full room key to display name mapping
    fn fetch_chat_mapping(&self) -> Result<ChatMapping>;
}

/// Repository over a read-only Messages store on disk
pub struct SqliteRepository {
    db: Database,
}

impl SqliteRepository {
    /// Open the store at `path`
    pub fn open(path: &Path) -> Result<Self> {
        Ok(Self {
            db: Database::open(path)?,
        })
    }
}

impl MessageRepository for SqliteRepository {
    fn fetch_rows(&self, limit: usize) -> Result<Vec<RawMessageRow>> {
        self.db.get_messages(limit)
    }

    fn fetch_chat_mapping(&self) -> Result<ChatMapping> {
        self.db.get_chat_mapping()
    }
}
