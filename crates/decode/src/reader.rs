//! Decoder dispatch behind a single closeable reader.

use crate::Compression;
use crate::error::{ErrorKind, Result};
use crate::header::Header;
use crate::replay::ReplayReader;
use bzip2::read::MultiBzDecoder;
use exn::ResultExt;
use flate2::read::MultiGzDecoder;
use std::fmt::{Debug, Formatter, Result as FmtResult};
use std::io::{self, BufRead, BufReader, Read};
use tracing::instrument;
use zstd::stream::read::Decoder as ZstdDecoder;

/// Release whatever a reader acquired for itself.
///
/// Closing never closes the source a reader was built from.
pub trait Close {
    /// # Errors
    ///
    /// Returns [`ErrorKind::Close`] if releasing the reader reported a failure.
    fn close(&mut self) -> Result<()>;
}

/// What [`Close::close`] does for a [`DecodingReader`], fixed by the detected
/// format when the reader is built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CloseAction {
    /// Nothing to release; always succeeds and the reader stays readable.
    Noop,
    /// Drop the decoder. Releasing it cannot fail.
    Release,
    /// Drop the decoder and report the first failure it returned while
    /// reading, if any.
    Delegate,
}

impl From<Compression> for CloseAction {
    fn from(format: Compression) -> Self {
        match format {
            // Bzip2 decoding state lives entirely in memory owned by the
            // decoder; there is nothing to release early.
            Compression::None | Compression::Bzip2 => CloseAction::Noop,
            Compression::Gzip => CloseAction::Delegate,
            Compression::Zstd => CloseAction::Release,
        }
    }
}

enum Decoder<R> {
    Passthrough(ReplayReader<R>),
    Bzip2(MultiBzDecoder<ReplayReader<R>>),
    Gzip(BufReader<MultiGzDecoder<ReplayReader<R>>>),
    Zstd(ZstdDecoder<'static, BufReader<ReplayReader<R>>>),
    Closed,
}

/// A [`Read`]er over the decompressed content of a source, or over the
/// source itself when no compression was detected.
///
/// Built by [`DecodingReader::new`] (or [`reader`]). Every format exposes the
/// same contract: read until end-of-stream, then [`close`](Close::close).
/// Closing is idempotent; see [`CloseAction`] for what it does per format.
/// Reading after a decoder has been released fails.
pub struct DecodingReader<R> {
    format: Compression,
    decoder: Decoder<R>,
    failure: Option<io::Error>,
}

/// Detect the compression of `source` and return a reader over its decoded
/// content. Shorthand for [`DecodingReader::new`].
///
/// # Examples
///
/// ```
/// use std::io::Read;
/// use sniffz_decode::{Close, Compression};
///
/// let mut reader = sniffz_decode::reader(&b"0"[..]).unwrap();
/// assert_eq!(reader.format(), Compression::None);
/// let mut output = Vec::new();
/// reader.read_to_end(&mut output).unwrap();
/// assert_eq!(output, b"0");
/// reader.close().unwrap();
/// ```
pub fn reader<R: Read>(source: R) -> Result<DecodingReader<R>> {
    DecodingReader::new(source)
}

impl<R: Read> DecodingReader<R> {
    /// Read the header of `source`, detect its compression, and wrap it in
    /// the matching decoder.
    ///
    /// Consumes up to [`HEADER_LEN`](crate::HEADER_LEN) bytes from `source`
    /// before returning; they are replayed to the decoder. Sources shorter
    /// than the header are not an error: their bytes are passed through.
    ///
    /// # Errors
    ///
    /// - [`ErrorKind::Peek`] if reading the header fails.
    /// - [`ErrorKind::Decoder`] if the detected decoder rejects the stream.
    #[instrument(level = "debug", skip_all, fields(format))]
    pub fn new(mut source: R) -> Result<Self> {
        let header = Header::peek(&mut source)?;
        let format = header.compression();
        tracing::Span::current().record("format", format.as_str());
        tracing::debug!(header = ?header.as_bytes(), %format, "detected format from header");
        format.decoder(ReplayReader::new(source, header))
    }

    /// The format detected from the header.
    #[must_use]
    pub fn format(&self) -> Compression {
        self.format
    }

    #[must_use]
    pub fn close_action(&self) -> CloseAction {
        self.format.into()
    }

    /// Whether the decoder has been released by [`close`](Close::close).
    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.decoder, Decoder::Closed)
    }

    fn release(&mut self) {
        if !self.is_closed() {
            tracing::trace!(format = %self.format, "releasing decoder");
            self.decoder = Decoder::Closed;
        }
    }
}

impl Compression {
    /// Wrap a replaying reader in the decoder for this format.
    pub(crate) fn decoder<R: Read>(self, source: ReplayReader<R>) -> Result<DecodingReader<R>> {
        let decoder = match self {
            Compression::None => Decoder::Passthrough(source),
            Compression::Bzip2 => Decoder::Bzip2(MultiBzDecoder::new(source)),
            Compression::Gzip => {
                // The member header is parsed on construction, but a failure
                // is only handed out by the first read. Surface it here; a
                // broken body is left for the caller's reads to find.
                let decoder = MultiGzDecoder::new(source);
                let parsed = decoder.header().is_some();
                let mut decoder = BufReader::new(decoder);
                if !parsed {
                    prime(&mut decoder).or_raise(|| ErrorKind::Decoder(self))?;
                }
                Decoder::Gzip(decoder)
            },
            Compression::Zstd => Decoder::Zstd(ZstdDecoder::new(source).or_raise(|| ErrorKind::Decoder(self))?),
        };
        Ok(DecodingReader { format: self, decoder, failure: None })
    }
}

fn prime<B: BufRead>(reader: &mut B) -> io::Result<()> {
    loop {
        match reader.fill_buf() {
            Ok(_) => return Ok(()),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

impl<R: Read> Read for DecodingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let result = match &mut self.decoder {
            Decoder::Passthrough(reader) => reader.read(buf),
            Decoder::Bzip2(reader) => reader.read(buf),
            Decoder::Gzip(reader) => reader.read(buf),
            Decoder::Zstd(reader) => reader.read(buf),
            Decoder::Closed => return Err(io::Error::other(format!("{} decoder already closed", self.format))),
        };
        if let Err(e) = &result
            && e.kind() != io::ErrorKind::Interrupted
            && self.failure.is_none()
        {
            self.failure = Some(io::Error::new(e.kind(), e.to_string()));
        }
        result
    }
}

impl<R: Read> Close for DecodingReader<R> {
    fn close(&mut self) -> Result<()> {
        match self.close_action() {
            CloseAction::Noop => Ok(()),
            CloseAction::Release => {
                self.release();
                Ok(())
            },
            CloseAction::Delegate => {
                self.release();
                match self.failure.take() {
                    Some(failure) => Err(failure).or_raise(|| ErrorKind::Close),
                    None => Ok(()),
                }
            },
        }
    }
}

impl<R> Debug for DecodingReader<R> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("DecodingReader")
            .field("format", &self.format)
            .field("closed", &matches!(self.decoder, Decoder::Closed))
            .field("failure", &self.failure)
            .finish_non_exhaustive()
    }
}
