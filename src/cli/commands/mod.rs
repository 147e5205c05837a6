//! Command implementations.

pub mod clear;
pub mod export;
pub mod init;
pub mod list;
pub mod optin;
pub mod session;
pub mod stats;
pub mod submit;

use crate::config::resolve_db_path;
use crate::error::{Error, Result};
use crate::store::KvStore;
use std::path::PathBuf;

/// Resolve the store path and open it, requiring `encore init` first.
pub(crate) fn open_store(db: Option<&PathBuf>) -> Result<KvStore> {
    let path = resolve_db_path(db.map(PathBuf::as_path)).ok_or(Error::NotInitialized)?;

    if !path.exists() {
        return Err(Error::NotInitialized);
    }

    KvStore::open(&path)
}
