//! Init command implementation.

use crate::config::resolve_db_path;
use crate::error::{Error, Result};
use crate::store::KvStore;
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// Output for init.
#[derive(Serialize)]
struct InitOutput {
    path: String,
    created: bool,
}

/// Execute the init command.
pub fn execute(force: bool, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let path = resolve_db_path(db_path.map(PathBuf::as_path))
        .ok_or_else(|| Error::Config("cannot determine home directory".to_string()))?;

    if path.exists() {
        if !force {
            return Err(Error::AlreadyInitialized { path });
        }
        std::fs::remove_file(&path)?;
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    // Opening creates the file and applies the schema
    KvStore::open(&path)?;
    info!(path = %path.display(), "store initialized");

    if json {
        let output = InitOutput {
            path: path.display().to_string(),
            created: true,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Initialized store at {}", path.display());
    }

    Ok(())
}
