//! Email opt-in model for Encore.
//!
//! Opt-ins live in their own collection, disjoint from responses, so
//! aggregate and exported response data never carries contact details.

use crate::export::Row;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A consented email contact record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptIn {
    /// Email address, syntax-validated by the caller before storage
    pub email: String,

    /// Always true when stored; a record only exists with consent
    pub consent: bool,

    /// Opt-in time (UTC, serialized RFC 3339)
    pub timestamp: DateTime<Utc>,

    /// Label of the event the consent was given at
    pub event: String,
}

impl OptIn {
    /// Create a new opt-in record with the current time.
    #[must_use]
    pub fn new(email: String, event: String) -> Self {
        Self {
            email,
            consent: true,
            timestamp: Utc::now(),
            event,
        }
    }

    /// Flatten into an ordered CSV row.
    #[must_use]
    pub fn csv_row(&self) -> Row {
        vec![
            ("email".to_string(), Some(self.email.clone())),
            ("consent".to_string(), Some(self.consent.to_string())),
            ("timestamp".to_string(), Some(self.timestamp.to_rfc3339())),
            ("event".to_string(), Some(self.event.clone())),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_optin_carries_consent() {
        let optin = OptIn::new("user@example.com".to_string(), "Concert".to_string());
        assert!(optin.consent);
        assert_eq!(optin.event, "Concert");
    }

    #[test]
    fn test_csv_row_shape() {
        let optin = OptIn::new("user@example.com".to_string(), "Concert".to_string());
        let row = optin.csv_row();
        assert_eq!(row[0].0, "email");
        assert_eq!(row[1].1, Some("true".to_string()));
    }
}
