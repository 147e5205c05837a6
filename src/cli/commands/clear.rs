//! Clear command implementation.
//!
//! Bulk-clears responses and opt-ins. The session identifier key is
//! deliberately left alone: device identity survives a data wipe.

use crate::error::Result;
use crate::repo::{OptInRepository, ResponseRepository};
use serde::Serialize;
use std::io::Write;
use std::path::PathBuf;

/// Output for clear.
#[derive(Serialize)]
struct ClearOutput {
    cleared: bool,
}

/// Execute the clear command.
pub fn execute(force: bool, db_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let store = super::open_store(db_path)?;

    if !force && !confirm("Clear local responses and emails on this device? [y/N] ")? {
        if json {
            println!("{}", serde_json::to_string(&ClearOutput { cleared: false })?);
        } else {
            println!("Nothing cleared.");
        }
        return Ok(());
    }

    ResponseRepository::new(&store).clear()?;
    OptInRepository::new(&store).clear()?;

    if json {
        println!("{}", serde_json::to_string(&ClearOutput { cleared: true })?);
    } else {
        println!("Local data cleared.");
    }

    Ok(())
}

/// Prompt on stderr and read a y/N answer from stdin.
fn confirm(prompt: &str) -> Result<bool> {
    eprint!("{prompt}");
    std::io::stderr().flush()?;

    let mut answer = String::new();
    std::io::stdin().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}
