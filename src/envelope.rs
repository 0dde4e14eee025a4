//! Uniform success/error reply envelope.
//!
//! Every operation answers with one envelope document. The transport always
//! succeeds; the `status` field inside the envelope carries the outcome,
//! so a deploy whose hosts partially failed is still a `status: 200` reply
//! with a populated failure list.

use serde::{Deserialize, Serialize};

use crate::error::OpsError;

/// Status code reported on a completed request.
const STATUS_OK: u16 = 200;
/// Status code reported on a failed request.
const STATUS_ERROR: u16 = 500;

/// Reply envelope shared by every operation.
///
/// Serializes as `{"status":200,"data":…}` on success and
/// `{"status":500,"error":…}` on failure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    /// The operation completed; `data` holds its payload.
    Success {
        /// Always 200.
        status: u16,
        /// Operation payload.
        data: T,
    },
    /// The operation failed; `error` holds the reason.
    Failure {
        /// Always 500.
        status: u16,
        /// Human-readable failure message.
        error: String,
    },
}

impl<T> Envelope<T> {
    /// Wraps a payload in a success envelope.
    #[must_use]
    pub fn success(data: T) -> Self {
        Self::Success { status: STATUS_OK, data }
    }

    /// Wraps a failure message in an error envelope.
    #[must_use]
    pub fn failure(error: impl Into<String>) -> Self {
        Self::Failure { status: STATUS_ERROR, error: error.into() }
    }
}

impl<T> From<Result<T, OpsError>> for Envelope<T> {
    fn from(result: Result<T, OpsError>) -> Self {
        match result {
            Ok(data) => Self::success(data),
            Err(err) => Self::failure(err.to_string()),
        }
    }
}
