//! String-keyed storage layer for Encore.
//!
//! All persisted state lives in a single SQLite file holding one
//! key/value table. The adapter in [`kv`] layers JSON encode/decode on
//! top of the raw strings, with a fallback value substituted when a
//! stored value fails to decode.
//!
//! # Submodules
//!
//! - [`kv`] - Key-value store adapter
//! - [`schema`] - Table definition

pub mod kv;
pub mod schema;

pub use kv::{KvStore, Loaded};
