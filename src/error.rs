//! Error types for the caller-side glue and the routing adapter.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReorderError {
    /// Some stops have no coordinates, or non-finite ones.
    #[error("cannot optimize: some locations have no coordinates (positions {positions:?})")]
    MissingCoordinates { positions: Vec<usize> },

    #[error("cannot optimize: {count} stops exceed the limit of {max}")]
    TooManyWaypoints { count: usize, max: usize },
}

#[derive(Debug, Error)]
pub enum OsrmError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("no route found (code {code})")]
    NoRoute { code: String },
}
