//! Error types for the hopper crate

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the hopper crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("no learned Q-table named '{name}' at {path} (train one first, or check the agent name)")]
    MissingTable { name: String, path: PathBuf },

    #[error("empty state description")]
    EmptyStateDescription,

    #[error("invalid state header '{header}' (expected 'frog_x frog_y score done goal')")]
    InvalidStateHeader { header: String },

    #[error("invalid flag value '{value}' for '{field}' in state header (expected 0 or 1)")]
    InvalidStateFlag { field: String, value: String },

    #[error("unknown action '{input}' (expected one of: u, d, l, r, _)")]
    UnknownAction { input: String },

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
