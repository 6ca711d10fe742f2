//! Decoding Error Types
//!
//! Structured errors using `exn` for automatic location tracking and error
//! tree construction. The original [`std::io::Error`] is always kept as the
//! child of the raised error; the [`ErrorKind`] names the stage that failed.

use crate::Compression;
use derive_more::{Display, Error};

/// A decoding error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for decoding operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The stage at which decoding failed.
///
/// `Display` names only the stage. The underlying failure is the child of the
/// raised [`Error`]; print it with `{:?}` to see the whole error tree.
#[derive(Debug, Display, Error, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Reading the header from the source failed (end-of-stream is not a failure).
    #[display("error from underlying reader")]
    Peek,
    /// The decoder picked from the header rejected the stream on construction.
    #[display("error from underlying {_0} reader")]
    Decoder(#[error(not(source))] Compression),
    /// Releasing the decoder reported a failure.
    #[display("error closing")]
    Close,
    /// Reading or writing while streaming the decoded content failed.
    #[display("I/O error")]
    Io,
}

impl ErrorKind {
    /// Returns `true` if retrying (with a fresh source) might succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(self, ErrorKind::Peek | ErrorKind::Io)
    }
}
