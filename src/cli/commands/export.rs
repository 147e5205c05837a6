//! Export command implementation.
//!
//! Responses and opt-ins export to separate files so the response CSV
//! never carries contact details.

use crate::config::EventConfig;
use crate::error::{Error, Result};
use crate::export::{to_csv, write_csv};
use crate::repo::{OptInRepository, ResponseRepository};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Default output file for response exports.
const RESPONSES_FILE: &str = "concert_responses.csv";

/// Default output file for opt-in exports.
const EMAILS_FILE: &str = "concert_emails.csv";

/// Output for export.
#[derive(Serialize)]
struct ExportOutput {
    path: String,
    records: usize,
}

/// Execute the export command.
pub fn execute(
    output: Option<&PathBuf>,
    emails: bool,
    db_path: Option<&PathBuf>,
    config: &EventConfig,
    json: bool,
) -> Result<()> {
    let store = super::open_store(db_path)?;

    let (rows, default_name) = if emails {
        let optins = OptInRepository::new(&store).all()?;
        let rows: Vec<_> = optins.iter().map(crate::model::OptIn::csv_row).collect();
        (rows, EMAILS_FILE)
    } else {
        let responses = ResponseRepository::new(&store).all()?;
        let rows: Vec<_> = responses.iter().map(|r| r.csv_row(&config.axes)).collect();
        (rows, RESPONSES_FILE)
    };

    if rows.is_empty() {
        return Err(Error::NothingToExport);
    }

    let path = output
        .map(PathBuf::clone)
        .unwrap_or_else(|| Path::new(default_name).to_path_buf());

    let records = rows.len();
    write_csv(&path, &to_csv(&rows))?;

    if json {
        let out = ExportOutput {
            path: path.display().to_string(),
            records,
        };
        println!("{}", serde_json::to_string(&out)?);
    } else {
        println!("Exported {} records to {}", records, path.display());
    }

    Ok(())
}
