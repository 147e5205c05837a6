//! Key-value store adapter.
//!
//! Wraps the SQLite key-value table with JSON encode/decode. Reads go
//! through [`KvStore::load`], which never fails on bad data: an absent
//! key or a value that no longer decodes yields the caller's fallback,
//! tagged so the caller can tell "empty by design" from "corrupt data
//! recovered". Writes are full overwrites of the key.

use crate::error::Result;
use crate::store::schema::apply_schema;
use rusqlite::{Connection, OptionalExtension};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::path::Path;
use std::time::Duration;
use tracing::warn;

/// Outcome of a [`KvStore::load`].
///
/// Both variants carry a usable value; `Fallback` means the key was
/// absent or its stored value failed to decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loaded<T> {
    /// The key held a value that decoded cleanly.
    Stored(T),
    /// The key was absent or corrupt; this is the caller's fallback.
    Fallback(T),
}

impl<T> Loaded<T> {
    /// Unwrap to the carried value, whichever variant.
    pub fn into_inner(self) -> T {
        match self {
            Self::Stored(value) | Self::Fallback(value) => value,
        }
    }

    /// True if the fallback was substituted.
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

/// SQLite-backed string-keyed store.
#[derive(Debug)]
pub struct KvStore {
    conn: Connection,
}

impl KvStore {
    /// Open a store at the given path.
    ///
    /// Creates the database and applies the schema if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or the
    /// schema fails.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)?;
        conn.busy_timeout(Duration::from_secs(5))?;
        apply_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory store (for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        apply_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Fetch the raw string stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying query fails.
    pub fn get_raw(&self, key: &str) -> Result<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    /// Write a raw string under `key`, overwriting any prior value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn put_raw(&self, key: &str, value: &str) -> Result<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            [key, value],
        )?;
        Ok(())
    }

    /// Delete any value at `key`. An absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn remove(&self, key: &str) -> Result<()> {
        self.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
        Ok(())
    }

    /// Load and decode the JSON value under `key`.
    ///
    /// An absent key or a decode failure yields `Loaded::Fallback` with
    /// the provided fallback; decode errors are logged and swallowed,
    /// never propagated. Store-level failures (a broken database is not
    /// "no data") DO propagate.
    ///
    /// # Errors
    ///
    /// Returns an error only if the underlying query fails.
    pub fn load<T: DeserializeOwned>(&self, key: &str, fallback: T) -> Result<Loaded<T>> {
        match self.get_raw(key)? {
            None => Ok(Loaded::Fallback(fallback)),
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(value) => Ok(Loaded::Stored(value)),
                Err(e) => {
                    warn!(key, error = %e, "stored value failed to decode, using fallback");
                    Ok(Loaded::Fallback(fallback))
                }
            },
        }
    }

    /// JSON-encode `value` and write it under `key`, fully overwriting
    /// prior content.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the write fails.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let raw = serde_json::to_string(value)?;
        self.put_raw(key, &raw)
    }
}
