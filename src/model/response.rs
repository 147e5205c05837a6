//! Response model for Encore.
//!
//! One response per submission: a label selection for every configured
//! category axis, an optional program segment, and a short free-text
//! note. Responses are immutable once persisted and carry no personally
//! identifying information.

use crate::config::CategoryAxis;
use crate::export::Row;
use crate::identity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// An audience feedback record.
///
/// Selections are keyed by axis id rather than named fields so the
/// configured axes can be relabeled without a storage migration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    /// Unique identifier (unique across all records in the store)
    pub id: String,

    /// Submission time (UTC, serialized RFC 3339)
    pub timestamp: DateTime<Utc>,

    /// Axis id -> selected label, one entry per configured axis
    pub selections: BTreeMap<String, String>,

    /// Program segment this response refers to, if given
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub segment: Option<String>,

    /// Free-text note, at most [`Response::MAX_NOTE_LEN`] characters
    #[serde(default)]
    pub note: String,

    /// Anonymous per-device session identifier
    pub session_id: String,
}

impl Response {
    /// Upper bound on note length, enforced by the submission layer.
    pub const MAX_NOTE_LEN: usize = 140;

    /// Create a new response with a fresh id and the current time.
    ///
    /// The caller is responsible for having validated the selections
    /// against the configured axes; the record itself is permissive.
    #[must_use]
    pub fn new(
        selections: BTreeMap<String, String>,
        segment: Option<String>,
        note: String,
        session_id: String,
    ) -> Self {
        Self {
            id: identity::new_record_id(),
            timestamp: Utc::now(),
            selections,
            segment,
            note,
            session_id,
        }
    }

    /// Flatten into an ordered CSV row.
    ///
    /// Axis columns follow the configured axis order; an axis the record
    /// does not carry (data drift) exports as an empty field.
    #[must_use]
    pub fn csv_row(&self, axes: &[CategoryAxis]) -> Row {
        let mut row: Row = vec![
            ("id".to_string(), Some(self.id.clone())),
            ("timestamp".to_string(), Some(self.timestamp.to_rfc3339())),
        ];
        for axis in axes {
            row.push((axis.id.clone(), self.selections.get(&axis.id).cloned()));
        }
        row.push(("segment".to_string(), self.segment.clone()));
        row.push(("note".to_string(), Some(self.note.clone())));
        row.push(("session_id".to_string(), Some(self.session_id.clone())));
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EventConfig;

    fn make_response() -> Response {
        let mut selections = BTreeMap::new();
        selections.insert("mood".to_string(), "Happy".to_string());
        selections.insert("story".to_string(), "Journey".to_string());
        Response::new(
            selections,
            None,
            "loved the strings".to_string(),
            "sess-1".to_string(),
        )
    }

    #[test]
    fn test_new_response_has_fresh_id() {
        let a = make_response();
        let b = make_response();

        assert!(a.id.starts_with("resp_"));
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_csv_row_follows_axis_order() {
        let config = EventConfig::default();
        let response = make_response();

        let row = response.csv_row(&config.axes);
        let names: Vec<&str> = row.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(
            names,
            vec!["id", "timestamp", "mood", "story", "segment", "note", "session_id"]
        );
    }

    #[test]
    fn test_csv_row_missing_axis_is_empty() {
        let config = EventConfig::default();
        let mut response = make_response();
        response.selections.remove("story");

        let row = response.csv_row(&config.axes);
        let story = row.iter().find(|(name, _)| name == "story").unwrap();
        assert_eq!(story.1, None);
    }

    #[test]
    fn test_serde_roundtrip() {
        let response = make_response();
        let json = serde_json::to_string(&response).unwrap();
        let back: Response = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, response.id);
        assert_eq!(back.selections, response.selections);
        assert_eq!(back.note, response.note);
    }
}
