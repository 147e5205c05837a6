//! Error types for the Encore CLI.
//!
//! Provides structured error handling with:
//! - Machine-readable error codes (`ErrorCode`)
//! - Category-based exit codes (2=store, 4=validation, 6=export, etc.)
//! - Retryability flags for scripted callers
//! - Context-aware recovery hints
//! - Structured JSON output for piped / non-TTY consumers
//!
//! Decode failures in the key-value store are NOT errors: the store
//! recovers them locally by substituting a fallback value (see
//! [`crate::store::Loaded`]). Everything here is a condition the caller
//! must be told about.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Encore operations.
pub type Result<T> = std::result::Result<T, Error>;

// ── Error Code ────────────────────────────────────────────────

/// Machine-readable error codes grouped by category.
///
/// Each code maps to a SCREAMING_SNAKE string and a category-based
/// exit code. Scripts match on the string; shell scripts on the exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Store (exit 2)
    NotInitialized,
    AlreadyInitialized,
    StoreError,

    // Validation (exit 4)
    MissingSelection,
    UnknownLabel,
    UnknownAxis,
    InvalidEmail,
    NoteTooLong,
    InvalidArgument,

    // Export (exit 6)
    NothingToExport,

    // Config (exit 7)
    ConfigError,

    // I/O (exit 8)
    IoError,
    JsonError,

    // Internal (exit 1)
    InternalError,
}

impl ErrorCode {
    /// Machine-readable SCREAMING_SNAKE code string.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        match self {
            Self::NotInitialized => "NOT_INITIALIZED",
            Self::AlreadyInitialized => "ALREADY_INITIALIZED",
            Self::StoreError => "STORE_ERROR",
            Self::MissingSelection => "MISSING_SELECTION",
            Self::UnknownLabel => "UNKNOWN_LABEL",
            Self::UnknownAxis => "UNKNOWN_AXIS",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::NoteTooLong => "NOTE_TOO_LONG",
            Self::InvalidArgument => "INVALID_ARGUMENT",
            Self::NothingToExport => "NOTHING_TO_EXPORT",
            Self::ConfigError => "CONFIG_ERROR",
            Self::IoError => "IO_ERROR",
            Self::JsonError => "JSON_ERROR",
            Self::InternalError => "INTERNAL_ERROR",
        }
    }

    /// Category-based exit code (1-8).
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::InternalError => 1,
            Self::NotInitialized | Self::AlreadyInitialized | Self::StoreError => 2,
            Self::MissingSelection
            | Self::UnknownLabel
            | Self::UnknownAxis
            | Self::InvalidEmail
            | Self::NoteTooLong
            | Self::InvalidArgument => 4,
            Self::NothingToExport => 6,
            Self::ConfigError => 7,
            Self::IoError | Self::JsonError => 8,
        }
    }

    /// Whether a scripted caller should retry with corrected input.
    ///
    /// True for validation errors (bad label, bad email, oversized note).
    /// False for store, I/O, or internal errors.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::MissingSelection
                | Self::UnknownLabel
                | Self::UnknownAxis
                | Self::InvalidEmail
                | Self::NoteTooLong
                | Self::InvalidArgument
        )
    }
}

// ── Error Enum ────────────────────────────────────────────────

/// Errors that can occur in Encore CLI operations.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Not initialized: run `encore init` first")]
    NotInitialized,

    #[error("Already initialized at {path}")]
    AlreadyInitialized { path: PathBuf },

    #[error("No selection for '{axis}'")]
    MissingSelection { axis: String },

    #[error("Unknown {axis} label: '{label}'")]
    UnknownLabel {
        axis: String,
        label: String,
        /// Closest valid label, if one is within edit distance.
        similar: Option<String>,
        /// The axis's fixed label list, for the hint.
        valid: Vec<String>,
    },

    #[error("Unknown axis: '{axis}'")]
    UnknownAxis {
        axis: String,
        /// Configured axis ids, for the hint.
        valid: Vec<String>,
    },

    #[error("That email address doesn't look valid: '{email}'")]
    InvalidEmail { email: String },

    #[error("Note is {len} characters (maximum is {max})")]
    NoteTooLong { len: usize, max: usize },

    #[error("No responses to export yet")]
    NothingToExport,

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Map this error to its structured `ErrorCode`.
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::NotInitialized => ErrorCode::NotInitialized,
            Self::AlreadyInitialized { .. } => ErrorCode::AlreadyInitialized,
            Self::MissingSelection { .. } => ErrorCode::MissingSelection,
            Self::UnknownLabel { .. } => ErrorCode::UnknownLabel,
            Self::UnknownAxis { .. } => ErrorCode::UnknownAxis,
            Self::InvalidEmail { .. } => ErrorCode::InvalidEmail,
            Self::NoteTooLong { .. } => ErrorCode::NoteTooLong,
            Self::NothingToExport => ErrorCode::NothingToExport,
            Self::Database(_) => ErrorCode::StoreError,
            Self::Io(_) => ErrorCode::IoError,
            Self::Json(_) => ErrorCode::JsonError,
            Self::InvalidArgument(_) => ErrorCode::InvalidArgument,
            Self::Config(_) => ErrorCode::ConfigError,
            Self::Other(_) => ErrorCode::InternalError,
        }
    }

    /// Category-based exit code, delegating to the `ErrorCode`.
    #[must_use]
    pub const fn exit_code(&self) -> u8 {
        self.error_code().exit_code()
    }

    /// Context-aware recovery hint for humans and scripts.
    ///
    /// Returns `None` if no actionable suggestion exists.
    #[must_use]
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::NotInitialized => {
                Some("Run `encore init` to create the local store".to_string())
            }

            Self::AlreadyInitialized { path } => Some(format!(
                "Store already exists at {}. Use `--force` to reinitialize.",
                path.display()
            )),

            Self::MissingSelection { axis } => Some(format!(
                "Pass {axis}=<label>. Every configured axis needs a selection."
            )),

            Self::UnknownLabel { similar, valid, .. } => {
                let mut hint = String::new();
                if let Some(s) = similar {
                    hint.push_str(&format!("Did you mean: {s}?\n  "));
                }
                hint.push_str(&format!("Valid labels: {}", valid.join(", ")));
                Some(hint)
            }

            Self::UnknownAxis { valid, .. } => {
                Some(format!("Configured axes: {}", valid.join(", ")))
            }

            Self::InvalidEmail { .. } => {
                Some("Expected a local@domain.tld shaped address".to_string())
            }

            Self::NoteTooLong { max, .. } => {
                Some(format!("Shorten the note to at most {max} characters"))
            }

            Self::NothingToExport => {
                Some("Submit at least one response first: `encore submit`".to_string())
            }

            Self::Database(_)
            | Self::Io(_)
            | Self::Json(_)
            | Self::InvalidArgument(_)
            | Self::Config(_)
            | Self::Other(_) => None,
        }
    }

    /// Structured JSON representation for machine consumption.
    ///
    /// Includes error code, message, retryability, exit code, and
    /// optional recovery hint. Scripts parse this instead of stderr text.
    #[must_use]
    pub fn to_structured_json(&self) -> serde_json::Value {
        let code = self.error_code();
        let mut obj = serde_json::json!({
            "error": {
                "code": code.as_str(),
                "message": self.to_string(),
                "retryable": code.is_retryable(),
                "exit_code": code.exit_code(),
            }
        });

        if let Some(hint) = self.hint() {
            obj["error"]["hint"] = serde_json::Value::String(hint);
        }

        obj
    }
}
