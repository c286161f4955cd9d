//! Error types for availability-engine operations.
//!
//! The slot computation itself is total and never fails. Errors only arise at
//! the edges: loading events, loading a slot policy, or querying a source.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AvailabilityError {
    /// An event source query failed (storage down, bad query, ...).
    #[error("Event source error: {0}")]
    Source(String),

    /// Event records could not be parsed from JSON.
    #[error("Invalid events: {0}")]
    InvalidEvents(#[from] serde_json::Error),

    /// The slot policy could not be parsed or failed validation.
    #[error("Invalid slot policy: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AvailabilityError>;
