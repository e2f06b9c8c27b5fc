//! Group chat display-name resolution.

use crate::models::ChatMapping;

/// Resolve a room key to its display name.
///
/// An empty key, or one the mapping does not know, resolves to an empty
/// string.
#[must_use]
pub fn resolve_group_name(room_key: &str, mapping: &ChatMapping) -> String {
    if room_key.is_empty() {
        return String::new();
    }
    mapping.get(room_key).unwrap_or_default().to_string()
}
