//! List command implementation.

use crate::config::EventConfig;
use crate::error::Result;
use crate::model::Response;
use crate::repo::ResponseRepository;
use serde::Serialize;
use std::path::PathBuf;

/// Output for list.
#[derive(Serialize)]
struct ListOutput {
    responses: Vec<Response>,
    count: usize,
    total: usize,
}

/// Execute the list command.
pub fn execute(
    limit: usize,
    db_path: Option<&PathBuf>,
    config: &EventConfig,
    json: bool,
) -> Result<()> {
    let store = super::open_store(db_path)?;
    let all = ResponseRepository::new(&store).all()?;

    let total = all.len();
    let responses: Vec<Response> = all.into_iter().take(limit).collect();

    if json {
        let output = ListOutput {
            count: responses.len(),
            total,
            responses,
        };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    if responses.is_empty() {
        println!("No responses yet.");
        return Ok(());
    }

    println!("Responses ({} of {}):", responses.len(), total);
    println!();
    for response in &responses {
        let picks: Vec<String> = config
            .axes
            .iter()
            .filter_map(|axis| response.selections.get(&axis.id).cloned())
            .collect();
        println!(
            "{}  {}  {}",
            response.timestamp.format("%Y-%m-%d %H:%M"),
            response.id,
            picks.join(" / ")
        );
        if !response.note.is_empty() {
            println!("  \"{}\"", response.note);
        }
    }

    Ok(())
}
