//! Import Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};
use suse_oval_decode::error::{Error as DecodeError, ErrorKind as DecodeErrorKind};

/// An import error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for import operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong
/// internally.
#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The HTTP client could not be constructed.
    #[display("failed to construct HTTP client")]
    Client,
    /// The request never produced a response (DNS, connect, timeout).
    #[display("request to {_0} failed")]
    Request(#[error(not(source))] String),
    /// The server answered with a non-success status.
    #[display("{url} returned HTTP status {status}")]
    Status {
        /// The URL that was requested.
        url: String,
        /// The status code the server answered with.
        status: u16,
    },
    /// The fetched payload could not be decoded into a document tree.
    #[display("failed to decode document: {_0}")]
    Decode(DecodeErrorKind),
}

impl ErrorKind {
    /// Convert a decode error into an import error, preserving the decode
    /// crate's `Exn` frame (error tree) as a child in its own error tree.
    #[track_caller]
    pub fn decode(err: DecodeError) -> Error {
        let inner = (*err).clone();
        err.raise(ErrorKind::Decode(inner))
    }
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Request(_) => true,
            Self::Status { status, .. } => *status >= 500,
            Self::Client | Self::Decode(_) => false,
        }
    }
}
