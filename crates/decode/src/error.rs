//! Decode Error Types
//!
//! This module provides structured errors using `exn` for automatic location
//! tracking and error tree construction.

use derive_more::{Display, Error};

/// A decode error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for decode operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Actionable error categories.
///
/// These describe what the caller should *do*, not what went wrong
/// internally.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The payload is not a valid single-member gzip stream.
    #[display("invalid gzip data")]
    Gzip,
    /// The decompressed payload is not valid UTF-8 text.
    #[display("invalid UTF-8 in decompressed document")]
    Utf8,
    /// The document text is not well-formed XML.
    #[display("malformed XML")]
    Xml,
}

impl ErrorKind {
    /// Returns `true` if retrying might succeed.
    pub fn is_retryable(&self) -> bool {
        // The payload is either valid or it isn't.
        false
    }
}
