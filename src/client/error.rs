use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

/// Errors returned by the Marble API client. None of these are retried
/// internally; each one aborts the pipeline.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Rejected before any network call was made.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The server answered with a non-success status.
    #[error("{path}: {status} {body}")]
    RequestFailed {
        path: String,
        status: StatusCode,
        body: String,
    },

    /// The request never produced an HTTP response (connect, DNS, ...).
    #[error("transport failure: {0}")]
    TransportFailed(#[from] reqwest::Error),

    /// A response decoded, but a field we rely on is missing or unreadable.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The poll budget ran out before the operation reported done.
    #[error("operation {operation_id} timed out after {}s", elapsed.as_secs())]
    OperationTimeout {
        operation_id: String,
        elapsed: Duration,
    },
}
