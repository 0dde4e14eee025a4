//! Error taxonomy for operator requests.
//!
//! Every error here is terminal for the current request: nothing retries,
//! and the caller renders the message into the failure envelope as-is.

use std::time::Duration;

use thiserror::Error;

use crate::ports::shell::RunError;

/// A failed operator request.
#[derive(Debug, Error)]
pub enum OpsError {
    /// A required input was missing or malformed. No process was started.
    #[error("{0}")]
    Validation(String),

    /// Listing, reading, or writing the descriptor store failed.
    #[error("{0}")]
    FileAccess(String),

    /// The orchestration tool could not be launched at all.
    #[error("{0}")]
    ExecutionStart(String),

    /// The orchestration tool ran past its configured time budget.
    #[error("command did not finish within {}s", .0.as_secs())]
    ExecutionTimeout(Duration),
}

impl From<RunError> for OpsError {
    fn from(err: RunError) -> Self {
        match err {
            RunError::Launch { .. } => Self::ExecutionStart(err.to_string()),
            RunError::Timeout { limit } => Self::ExecutionTimeout(limit),
        }
    }
}
