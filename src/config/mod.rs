//! Configuration management.
//!
//! Two concerns live here:
//!
//! - **Store location**: the SQLite file defaults to `~/.encore/encore.db`
//!   and can be overridden with `--db` or `ENCORE_DB`.
//! - **Event configuration**: the event label and the category axes
//!   (each a fixed, ordered list of allowed labels). Axis ids are data,
//!   not hardcoded field names, so an event can relabel its axes without
//!   a storage migration. The built-in default suits a concert: a `mood`
//!   axis and a `story` axis with eight labels each.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One selection dimension with its fixed ordered label list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryAxis {
    /// Storage field key (e.g. "mood"). Stable across relabelings.
    pub id: String,

    /// Display name for prompts and chart titles.
    pub title: String,

    /// Allowed labels, in display order. Also seeds the tally buckets.
    pub labels: Vec<String>,
}

/// Event-level configuration: label plus category axes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventConfig {
    /// Fixed label identifying the event context (stamped on opt-ins).
    pub event: String,

    /// Selection axes, in display order.
    pub axes: Vec<CategoryAxis>,
}

impl Default for EventConfig {
    fn default() -> Self {
        Self {
            event: "Concert".to_string(),
            axes: vec![
                CategoryAxis {
                    id: "mood".to_string(),
                    title: "Mood".to_string(),
                    labels: [
                        "Happy",
                        "Relaxed",
                        "Melancholy",
                        "Excited",
                        "Calm",
                        "Tense",
                        "Awe",
                        "Reflective",
                    ]
                    .map(String::from)
                    .to_vec(),
                },
                CategoryAxis {
                    id: "story".to_string(),
                    title: "Story".to_string(),
                    labels: [
                        "Journey",
                        "Conflict",
                        "Memory",
                        "Loss",
                        "Renewal",
                        "Wonder",
                        "Resilience",
                        "Uncertainty",
                    ]
                    .map(String::from)
                    .to_vec(),
                },
            ],
        }
    }
}

impl EventConfig {
    /// Load an event configuration from a JSON file.
    ///
    /// Unlike stored collections, a malformed config file is a reported
    /// error, not a silent fallback: the operator asked for this file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or fails
    /// structural validation.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("cannot read {}: {e}", path.display())))?;
        let config: Self = serde_json::from_str(&raw)
            .map_err(|e| Error::Config(format!("cannot parse {}: {e}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the effective configuration.
    ///
    /// An explicit path must load; otherwise `~/.encore/event.json` is
    /// used if present, and the built-in default if not.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but fails to load.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        if let Some(path) = default_config_path() {
            if path.exists() {
                return Self::load(&path);
            }
        }
        Ok(Self::default())
    }

    /// Look up an axis by id.
    #[must_use]
    pub fn axis(&self, id: &str) -> Option<&CategoryAxis> {
        self.axes.iter().find(|axis| axis.id == id)
    }

    /// Configured axis ids, in display order.
    #[must_use]
    pub fn axis_ids(&self) -> Vec<String> {
        self.axes.iter().map(|axis| axis.id.clone()).collect()
    }

    /// Structural validation: at least one axis, unique non-empty ids,
    /// non-empty label lists.
    fn validate(&self) -> Result<()> {
        if self.axes.is_empty() {
            return Err(Error::Config("no axes configured".to_string()));
        }
        let mut seen = std::collections::HashSet::new();
        for axis in &self.axes {
            if axis.id.is_empty() {
                return Err(Error::Config("axis with empty id".to_string()));
            }
            if !seen.insert(axis.id.as_str()) {
                return Err(Error::Config(format!("duplicate axis id '{}'", axis.id)));
            }
            if axis.labels.is_empty() {
                return Err(Error::Config(format!("axis '{}' has no labels", axis.id)));
            }
        }
        Ok(())
    }
}

/// Get the Encore home directory (`~/.encore`).
#[must_use]
pub fn encore_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".encore"))
}

/// Resolve the store path: explicit override or `~/.encore/encore.db`.
#[must_use]
pub fn resolve_db_path(explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => encore_dir().map(|dir| dir.join("encore.db")),
    }
}

/// Default event config file location (`~/.encore/event.json`).
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    encore_dir().map(|dir| dir.join("event.json"))
}
