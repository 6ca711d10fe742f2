//! CLI Error Types

use derive_more::{Display, Error};
use std::path::PathBuf;

/// A CLI error with automatic location tracking.
pub type Error = exn::Exn<ErrorKind>;
/// Result type alias for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Display, Error)]
pub enum ErrorKind {
    /// The input could not be opened.
    #[display("cannot open {}", _0.display())]
    Open(#[error(not(source))] PathBuf),
    /// The input could not be decoded.
    #[display("cannot decode {}", _0.display())]
    Decode(#[error(not(source))] PathBuf),
    /// Standard output refused the decoded content.
    #[display("cannot write to standard output")]
    Write,
}
