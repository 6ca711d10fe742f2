//! Decoding Operations

use crate::error::{ErrorKind, Result};
use crate::reader::{Close, DecodingReader, reader};
use exn::ResultExt;
use std::io::{Read, Write};
use tracing::instrument;

impl<R: Read> DecodingReader<R> {
    /// Read all remaining decoded content, then close.
    pub fn into_bytes(mut self) -> Result<Vec<u8>> {
        let mut output = Vec::new();
        self.read_to_end(&mut output).or_raise(|| ErrorKind::Io)?;
        self.close()?;
        Ok(output)
    }

    /// Stream all remaining decoded content into `writer`, then close.
    /// Returns the number of bytes written.
    ///
    /// # Examples
    ///
    /// ```
    /// let mut output = Vec::new();
    /// let bytes = sniffz_decode::reader(&b"Hello, world!"[..])
    ///     .unwrap()
    ///     .copy_into(&mut output)
    ///     .unwrap();
    /// assert_eq!(output, b"Hello, world!");
    /// assert_eq!(bytes, 13);
    /// ```
    #[instrument(skip_all, fields(format = %self.format(), output_size))]
    pub fn copy_into<W: Write + ?Sized>(mut self, writer: &mut W) -> Result<u64> {
        let size = std::io::copy(&mut self, writer).or_raise(|| ErrorKind::Io)?;
        tracing::Span::current().record("output_size", size);
        self.close()?;
        Ok(size)
    }
}

/// Decode a byte slice in memory, whatever it was compressed with.
///
/// # Examples
///
/// ```
/// use std::io::Write;
///
/// let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::default());
/// encoder.write_all(b"Hello, world!").unwrap();
/// let compressed = encoder.finish().unwrap();
///
/// assert_eq!(sniffz_decode::decompress(&compressed).unwrap(), b"Hello, world!");
/// assert_eq!(sniffz_decode::decompress(b"Hello, world!").unwrap(), b"Hello, world!");
/// ```
#[instrument(skip_all, fields(input_size = input.len()))]
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    reader(input)?.into_bytes()
}
