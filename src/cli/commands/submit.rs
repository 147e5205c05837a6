//! Submit command implementation.
//!
//! All validation happens here, before the repository is touched: a
//! submission with a missing or unknown selection stores nothing.

use crate::cli::SubmitArgs;
use crate::config::EventConfig;
use crate::error::{Error, Result};
use crate::identity;
use crate::model::Response;
use crate::repo::ResponseRepository;
use crate::validate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::PathBuf;
use tracing::debug;

/// Output for submit.
#[derive(Serialize)]
struct SubmitOutput {
    id: String,
    selections: BTreeMap<String, String>,
    session_id: String,
}

/// Execute the submit command.
pub fn execute(
    args: &SubmitArgs,
    db_path: Option<&PathBuf>,
    config: &EventConfig,
    json: bool,
) -> Result<()> {
    let store = super::open_store(db_path)?;

    // Parse and normalize <axis>=<label> pairs
    let mut selections = BTreeMap::new();
    for raw in &args.selections {
        let Some((axis_id, label)) = raw.split_once('=') else {
            return Err(Error::InvalidArgument(format!(
                "expected <axis>=<label>, got '{raw}'"
            )));
        };
        let axis = config.axis(axis_id.trim()).ok_or_else(|| Error::UnknownAxis {
            axis: axis_id.trim().to_string(),
            valid: config.axis_ids(),
        })?;
        let canonical = validate::resolve_label(axis, label)?;
        selections.insert(axis.id.clone(), canonical);
    }

    // Every configured axis needs a selection
    for axis in &config.axes {
        if !selections.contains_key(&axis.id) {
            return Err(Error::MissingSelection {
                axis: axis.id.clone(),
            });
        }
    }

    let note = args.note.as_deref().unwrap_or("").trim().to_string();
    validate::check_note(&note)?;

    let session_id = identity::session_id(&store)?;
    let response = Response::new(selections, args.segment.clone(), note, session_id);
    debug!(id = %response.id, "submitting response");

    ResponseRepository::new(&store).add(&response)?;

    if crate::is_silent() {
        println!("{}", response.id);
        return Ok(());
    }

    if json {
        let output = SubmitOutput {
            id: response.id,
            selections: response.selections,
            session_id: response.session_id,
        };
        println!("{}", serde_json::to_string(&output)?);
    } else {
        println!("Thanks! Your response was saved ({}).", response.id);
    }

    Ok(())
}
