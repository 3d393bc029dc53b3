// Centralized error handling for the report pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for pipeline operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised by the transport client when the HTTP request cannot
/// complete. A single attempt is made; none of these are retried.
#[derive(Error, Debug)]
pub enum ConnectionError {
    #[error("request to {url} failed: {source}")]
    RequestFailed {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("request to {url} timed out after {timeout_secs}s")]
    Timeout { url: String, timeout_secs: u64 },

    #[error("{url} returned HTTP {status}")]
    BadStatus { url: String, status: u16 },

    #[error("failed to read response body from {url}: {source}")]
    BodyRead {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Errors raised while turning the fetched payload into user records.
///
/// Field-level variants carry the zero-based record index within the
/// response array so the offending entry can be located upstream.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("response body is not valid JSON: {0}")]
    InvalidJson(#[source] serde_json::Error),

    #[error("expected a JSON array of user objects, got {found}")]
    NotAnArray { found: &'static str },

    #[error("record {index} is not a JSON object")]
    NotAnObject { index: usize },

    #[error("record {index}: missing required field `{field}`")]
    MissingField { index: usize, field: &'static str },

    #[error("record {index}: field `{field}` has the wrong type (expected {expected})")]
    WrongType {
        index: usize,
        field: &'static str,
        expected: &'static str,
    },

    #[error("record {index}: `{value}` is not a plausible email address")]
    InvalidEmail { index: usize, value: String },
}

/// Errors raised while persisting the rendered report
#[derive(Error, Debug)]
pub enum PersistError {
    #[error("failed to create report directory {dir}: {source}")]
    CreateDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write report to {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Top-level pipeline error. Each stage's failures fold into one of three
/// kinds so the binary can print a distinguishable diagnostic per kind and
/// map it to a stable exit code.
#[derive(Error, Debug)]
pub enum Error {
    #[error("connection failure: {0}")]
    Connection(#[from] ConnectionError),

    #[error("parse failure: {0}")]
    Parse(#[from] ParseError),

    #[error("persistence failure: {0}")]
    Persist(#[from] PersistError),
}

impl Error {
    /// Machine-readable failure kind, stable across variants of the
    /// underlying stage error.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::Connection(_) => "connection_failure",
            Error::Parse(_) => "parse_failure",
            Error::Persist(_) => "persistence_failure",
        }
    }

    /// Process exit code for this failure kind. Zero is reserved for
    /// success, one for startup errors (config, runtime).
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Connection(_) => 2,
            Error::Parse(_) => 3,
            Error::Persist(_) => 4,
        }
    }
}
