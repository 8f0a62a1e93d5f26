//! Harness errors: everything that can go wrong before or after a search.
//!
//! "No plan found" is not an error here; it is a [`crate::runner::RunReport`]
//! whose outcome is a `SearchFailure`.

use std::path::PathBuf;

use craftplan_kernel::error::ConfigError;
use craftplan_kernel::proof::canon::CanonError;
use craftplan_search::error::SearchError;

/// Result alias for harness operations.
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Anything that stops the harness from producing a report.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// The problem file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The problem text is not valid JSON or does not match the schema.
    #[error("malformed problem: {0}")]
    Json(#[from] serde_json::Error),
    /// The problem parsed but does not compile.
    #[error("invalid problem: {0}")]
    Config(#[from] ConfigError),
    /// The search policy was rejected before searching.
    #[error("invalid search policy: {0}")]
    Policy(#[from] SearchError),
    /// A catalogue or plan digest could not be computed.
    #[error("canonicalization failed: {0}")]
    Canon(#[from] CanonError),
}
