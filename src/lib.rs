//! Encore CLI - local-first audience feedback for live events
//!
//! This crate provides the core functionality for the `encore` CLI tool:
//! collect a mood/story selection and a short note from audience members
//! during a live event, persist everything on-device, tally the results,
//! and export them as CSV. There is no server.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`model`] - Data types (Response, OptIn)
//! - [`store`] - String-keyed SQLite storage with JSON values
//! - [`repo`] - Append-only record repositories
//! - [`identity`] - Anonymous session and record identifiers
//! - [`tally`] - Per-axis label counts
//! - [`export`] - CSV serialization and file output
//! - [`chart`] - Terminal bar charts
//! - [`config`] - Store location and event configuration
//! - [`error`] - Error types and handling

#![forbid(unsafe_code)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod chart;
pub mod cli;
pub mod config;
pub mod error;
pub mod export;
pub mod identity;
pub mod model;
pub mod repo;
pub mod store;
pub mod tally;
pub mod validate;

pub use error::{Error, Result};

/// Global silent mode flag for `--silent` output.
///
/// When set, create commands print only the record ID
/// instead of full output. Avoids threading a `silent` bool
/// through every handler signature.
pub static SILENT: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);

/// Check if silent mode is active.
#[inline]
pub fn is_silent() -> bool {
    SILENT.load(std::sync::atomic::Ordering::Relaxed)
}
