//! Error types for the remora client.

use thiserror::Error;

/// Errors returned by connector and session operations.
///
/// Every operation reports its failure to the immediate caller; nothing is
/// logged-and-dropped inside the crate and nothing aborts the process.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The HTTP call could not be completed: DNS, connect, timeout, or a
    /// failure while reading the response body.
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The response body was not the JSON the server contract promises.
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),

    /// The server returned a `sessionId` that is not a parseable UUID.
    #[error("invalid session id {0:?}: {1}")]
    SessionId(String, #[source] uuid::Error),

    /// The server answered with a non-success status code.
    #[error("server returned {status} for {method} {path}")]
    Remote {
        status: reqwest::StatusCode,
        method: reqwest::Method,
        path: String,
    },
}

/// Result type alias using ClientError
pub type Result<T> = std::result::Result<T, ClientError>;
