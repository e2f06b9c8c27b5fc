//! Messages store schema definitions
//!
//! Table and column names of the macOS Messages `chat.db` that this crate
//! reads. Only the columns below are touched; the store is never written.

/// Message table schema
pub mod message {
    /// Table name
    pub const TABLE: &str = "message";
    /// Primary key column
    pub const ROWID: &str = "ROWID";
    /// Nanoseconds since 2001-01-01 local time
    pub const DATE: &str = "date";
    /// Plain-text body column
    pub const TEXT: &str = "text";
    /// Serialized rich-text body column
    pub const ATTRIBUTED_BODY: &str = "attributedBody";
    /// Foreign key into `handle`
    pub const HANDLE_ID: &str = "handle_id";
    /// Flag set on outgoing messages
    pub const IS_FROM_ME: &str = "is_from_me";
    /// Group chat room key
    pub const CACHE_ROOMNAMES: &str = "cache_roomnames";
}

/// Handle table schema
pub mod handle {
    /// Table name
    pub const TABLE: &str = "handle";
    /// Primary key column
    pub const ROWID: &str = "ROWID";
    /// Phone number or email of the sender
    pub const ID: &str = "id";
}

/// Chat table schema
pub mod chat {
    /// Table name
    pub const TABLE: &str = "chat";
    /// Primary key column
    pub const ROWID: &str = "ROWID";
    /// Group chat room key
    pub const ROOM_NAME: &str = "room_name";
    /// Group chat display name
    pub const DISPLAY_NAME: &str = "display_name";
}
