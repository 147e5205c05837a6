//! Session command implementation.

use crate::error::Result;
use crate::identity;
use serde::Serialize;
use std::path::PathBuf;

/// Output for session.
#[derive(Serialize)]
struct SessionOutput {
    session_id: String,
}

/// Execute the session command, creating the id on first use.
pub fn execute(db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let store = super::open_store(db_path)?;
    let session_id = identity::session_id(&store)?;

    if json {
        let output = SessionOutput { session_id };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("{session_id}");
    }

    Ok(())
}
