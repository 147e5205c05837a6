//! Stats command implementation.
//!
//! Recomputes per-axis tallies from the stored responses and hands
//! each `{labels, values}` pair to the chart renderer. When charts
//! cannot be drawn (stdout is not a terminal), the tallies degrade to
//! plain label/count lines with a notice — never a failure.

use crate::chart;
use crate::config::EventConfig;
use crate::error::Result;
use crate::repo::ResponseRepository;
use crate::tally::tally;
use serde::Serialize;
use std::path::PathBuf;

/// Per-axis block in the stats output.
#[derive(Serialize)]
struct AxisStats {
    id: String,
    title: String,
    labels: Vec<String>,
    values: Vec<u64>,
}

/// Output for stats.
#[derive(Serialize)]
struct StatsOutput {
    responses: usize,
    axes: Vec<AxisStats>,
}

/// Execute the stats command.
pub fn execute(db_path: Option<&PathBuf>, config: &EventConfig, json: bool) -> Result<()> {
    let store = super::open_store(db_path)?;
    let responses = ResponseRepository::new(&store).all()?;

    let tallies: Vec<_> = config
        .axes
        .iter()
        .map(|axis| {
            let t = tally(
                &responses,
                |r| r.selections.get(&axis.id).map(String::as_str),
                &axis.labels,
            );
            (axis, t)
        })
        .collect();

    if json {
        let output = StatsOutput {
            responses: responses.len(),
            axes: tallies
                .iter()
                .map(|(axis, t)| AxisStats {
                    id: axis.id.clone(),
                    title: axis.title.clone(),
                    labels: t.labels().iter().map(ToString::to_string).collect(),
                    values: t.counts(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string(&output)?);
        return Ok(());
    }

    println!("{} responses", responses.len());
    println!();

    let charts = chart::is_available();
    if !charts {
        eprintln!("Charts need a terminal; showing plain counts.");
    }

    for (axis, t) in &tallies {
        if charts {
            chart::render(&axis.title, t);
        } else {
            chart::render_plain(&axis.title, t);
        }
    }

    Ok(())
}
