//! Record repositories for Encore.
//!
//! Each repository owns one collection under one store key and supports
//! exactly three operations: read all (insertion order), append one,
//! and bulk clear. There is no single-record deletion and no mutation
//! of persisted records.
//!
//! Every append is a full-collection read-modify-write through the
//! key-value adapter. Two concurrent writers can race and silently lose
//! an update; accepted for the local single-user design.

pub mod optins;
pub mod responses;

pub use optins::OptInRepository;
pub use responses::ResponseRepository;
