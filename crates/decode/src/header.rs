//! Header peeking.

use crate::Compression;
use crate::error::{ErrorKind, Result};
use exn::ResultExt;
use std::io::{self, Read};
use tracing::instrument;

/// Number of header bytes needed to detect a format (the longest magic
/// bytes of any supported format).
pub const HEADER_LEN: usize = 4;

/// The first (up to) [`HEADER_LEN`] bytes of a stream.
///
/// A header holds fewer than [`HEADER_LEN`] bytes only when the source ran
/// out first, in which case those bytes are the entire content of the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Header {
    bytes: [u8; HEADER_LEN],
    len: usize,
}

impl Header {
    /// Read the header from `source`.
    ///
    /// Keeps reading until [`HEADER_LEN`] bytes are collected or the source
    /// reports end-of-stream, so sources that hand out a byte at a time are
    /// fine. Reads interrupted by [`io::ErrorKind::Interrupted`] are retried.
    /// Never reads more than [`HEADER_LEN`] bytes from the source.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::Peek`] if the source fails with anything other
    /// than end-of-stream.
    #[instrument(level = "trace", skip_all, fields(len))]
    pub fn peek<R: Read + ?Sized>(source: &mut R) -> Result<Self> {
        let mut bytes = [0; HEADER_LEN];
        let mut len = 0;
        while len < HEADER_LEN {
            match source.read(&mut bytes[len..]) {
                Ok(0) => break,
                Ok(n) => len += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e).or_raise(|| ErrorKind::Peek),
            }
        }
        tracing::Span::current().record("len", len);
        if len < HEADER_LEN {
            tracing::trace!(len, "source exhausted before a full header was read");
        }
        Ok(Self { bytes, len })
    }

    /// The header bytes actually read.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether all [`HEADER_LEN`] bytes were read. An incomplete header means
    /// the source has been exhausted.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.len == HEADER_LEN
    }

    /// Classify the header. Incomplete headers are never classified as
    /// compressed: their bytes are the whole stream and get passed through.
    #[must_use]
    pub fn compression(&self) -> Compression {
        if !self.is_complete() {
            return Compression::None;
        }
        Compression::from_magic_bytes(self.as_bytes())
    }
}

impl AsRef<[u8]> for Header {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}
