// src/error.rs
//! Everything that can stop a run. Anything not listed here is dropped
//! silently by the extractors (see `engine::types::Policy`).

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Connection refused, timeout, DNS failure, body read failure.
    #[error("error with request to {url}: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Anything but `200 OK`.
    #[error("error code from request to {url}: {status}")]
    Status { url: String, status: u16 },

    /// Fewer tables in the page than the layout requires.
    #[error("{page}: table index {index} out of range ({found} tables found)")]
    MissingTable {
        page: &'static str,
        index: usize,
        found: usize,
    },

    /// Only raised when the policy aborts on shape mismatches.
    #[error("{table}: row {row} has {found} cells, expected {expected}")]
    RowShape {
        table: &'static str,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Only raised when the policy aborts on unknown labels.
    #[error("{table}: unrecognized label {label:?}")]
    UnknownLabel { table: &'static str, label: String },

    #[error("failed to serialize record: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
