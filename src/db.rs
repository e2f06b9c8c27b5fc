use std::path::Path;

use rusqlite::types::ValueRef;
use rusqlite::{params, Connection, OpenFlags, Row};
use tracing::debug;

use crate::error::{MsgCodeError, Result};
use crate::models::{ChatMapping, RawMessageRow};
use crate::schema::{chat, handle, message};

/// Read-only handle on a Messages `chat.db`
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open the store at `path` without write or create permissions
    pub fn open(path: &Path) -> Result<Self> {
        let flags = OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX;
        let conn = Connection::open_with_flags(path, flags).map_err(|source| MsgCodeError::StoreUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "Opened message store read-only");
        Ok(Self { conn })
    }

    /// Read message rows joined with their sender handle.
    ///
    /// With a non-zero `limit` the newest `limit` rows are returned, newest
    /// first. With `limit == 0` every row is returned in store order.
    pub fn get_messages(&self, limit: usize) -> Result<Vec<RawMessageRow>> {
        let mut query = format!(
            "SELECT m.{}, m.{}, m.{}, m.{}, h.{}, m.{}, m.{} FROM {} m LEFT JOIN {} h ON m.{} = h.{}",
            message::ROWID,
            message::DATE,
            message::TEXT,
            message::ATTRIBUTED_BODY,
            handle::ID,
            message::IS_FROM_ME,
            message::CACHE_ROOMNAMES,
            message::TABLE,
            handle::TABLE,
            message::HANDLE_ID,
            handle::ROWID
        );

        if limit > 0 {
            query.push_str(&format!(" ORDER BY m.{} DESC LIMIT ?1", message::DATE));
        }

        let mut stmt = self.conn.prepare(&query)?;
        let mut rows = if limit > 0 {
            stmt.query(params![i64::try_from(limit).unwrap_or(i64::MAX)])?
        } else {
            stmt.query(params![])?
        };

        let mut results = Vec::new();
        while let Some(row) = rows.next()? {
            results.push(Self::map_message_row(row)?);
        }

        debug!(count = results.len(), limit, "Read message rows");
        Ok(results)
    }

    /// Load every room key with its display name.
    ///
    /// Rows are applied in `ROWID` order, so a repeated room key keeps the
    /// display name of its newest chat row.
    pub fn get_chat_mapping(&self) -> Result<ChatMapping> {
        let query = format!(
            "SELECT {}, {} FROM {} WHERE {} IS NOT NULL AND {} != '' ORDER BY {}",
            chat::ROOM_NAME,
            chat::DISPLAY_NAME,
            chat::TABLE,
            chat::ROOM_NAME,
            chat::ROOM_NAME,
            chat::ROWID
        );

        let mut stmt = self.conn.prepare(&query)?;
        let pairs = stmt.query_map(params![], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, Option<String>>(1)?.unwrap_or_default()))
        })?;

        let mut mapping = ChatMapping::default();
        for pair in pairs {
            let (room_key, display_name) = pair?;
            mapping.insert(room_key, display_name);
        }

        debug!(rooms = mapping.len(), "Loaded chat mapping");
        Ok(mapping)
    }

    fn map_message_row(row: &Row<'_>) -> rusqlite::Result<RawMessageRow> {
        Ok(RawMessageRow {
            row_id: row.get(0)?,
            date: row.get::<_, Option<i64>>(1)?.unwrap_or_default(),
            text: row.get(2)?,
            attributed_body: payload_bytes(row.get_ref(3)?),
            handle: row.get(4)?,
            is_from_me: row.get::<_, Option<bool>>(5)?.unwrap_or_default(),
            cache_roomnames: row.get(6)?,
        })
    }
}

/// `attributedBody` is normally a BLOB but older rows may hold TEXT
fn payload_bytes(value: ValueRef<'_>) -> Option<Vec<u8>> {
    match value {
        ValueRef::Blob(bytes) | ValueRef::Text(bytes) => Some(bytes.to_vec()),
        ValueRef::Null | ValueRef::Integer(_) | ValueRef::Real(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_store_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let err = Database::open(&dir.path().join("missing.db")).err().unwrap();
        assert!(matches!(err, MsgCodeError::StoreUnavailable { .. }));
    }

    #[test]
    fn test_payload_bytes() {
        assert_eq!(payload_bytes(ValueRef::Blob(b"abc")), Some(b"abc".to_vec()));
        assert_eq!(payload_bytes(ValueRef::Text(b"abc")), Some(b"abc".to_vec()));
        assert_eq!(payload_bytes(ValueRef::Null), None);
    }
}
