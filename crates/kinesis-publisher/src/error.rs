//! Error types for stream submission.

use thiserror::Error;

/// Errors that can occur while submitting a record.
///
/// Every variant is treated the same way by the publisher: logged and
/// dropped. The variants only exist to make the log line useful.
#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Throughput exceeded on stream '{0}'")]
    Throttled(String),

    #[error("Stream not found: {0}")]
    StreamNotFound(String),

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Service error: {0}")]
    Service(String),

    #[error("Transport error: {0}")]
    Transport(String),
}
