//! Anonymous identity for Encore.
//!
//! Two kinds of identifier:
//! - a **session id**, one per device store, created lazily and kept
//!   until the store file itself is deleted (bulk clear leaves it —
//!   device identity survives a data wipe);
//! - a **record id**, fresh per submission.
//!
//! Both are UUID v4 based; at event scale (hundreds to low thousands of
//! records) collisions are negligible.

use crate::error::Result;
use crate::store::KvStore;
use uuid::Uuid;

/// Store key holding the session identifier (plain string, not JSON).
pub const SESSION_KEY: &str = "session_id";

/// Return the device's stable anonymous session id, creating and
/// persisting one on first use. Idempotent across calls.
///
/// # Errors
///
/// Returns an error if the store read or write fails.
pub fn session_id(store: &KvStore) -> Result<String> {
    if let Some(id) = store.get_raw(SESSION_KEY)? {
        return Ok(id);
    }

    let id = format!("sess_{}", Uuid::new_v4());
    store.put_raw(SESSION_KEY, &id)?;
    Ok(id)
}

/// Generate a fresh unique id for a submitted record.
#[must_use]
pub fn new_record_id() -> String {
    format!("resp_{}", &Uuid::new_v4().to_string()[..12])
}
