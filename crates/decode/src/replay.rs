//! Header replay for one-pass sources.
//!
//! Detecting a format consumes the header from the source. [`ReplayReader`]
//! hands those bytes out again before continuing with the source, so the
//! consumer (a decoder, or the caller directly) sees the stream from its very
//! first byte.

use crate::header::Header;
use std::io::{self, Read};

enum State {
    /// Header bytes remain; `offset` is the next one to hand out.
    Replaying { header: Header, offset: usize },
    /// Header fully replayed; reads go straight to the source.
    Forwarding,
    /// Header fully replayed, and it was short: the source already reported
    /// end-of-stream and is never read again.
    Exhausted,
}

/// A [`Read`]er that yields a previously consumed [`Header`], then the rest
/// of the source it was read from.
///
/// Once the header has been replayed it is dropped and never consulted
/// again; every later read is forwarded to the source unchanged. The source
/// is owned but never closed; pass `&mut R` to keep hold of it.
pub struct ReplayReader<R> {
    source: R,
    state: State,
}

impl<R: Read> ReplayReader<R> {
    /// Replay `header` in front of the remaining `source`.
    ///
    /// `header` must be what was last read from `source`. A short header
    /// means `source` is exhausted: the reader serves exactly those bytes and
    /// then reports end-of-stream without touching the source.
    pub fn new(source: R, header: Header) -> Self {
        Self { source, state: State::after(header, 0) }
    }

    /// Whether header bytes remain to be replayed.
    pub fn is_replaying(&self) -> bool {
        matches!(self.state, State::Replaying { .. })
    }

    pub fn get_ref(&self) -> &R {
        &self.source
    }

    /// Unwrap the source. Header bytes that have not been replayed yet are
    /// lost.
    pub fn into_inner(self) -> R {
        self.source
    }
}

impl State {
    fn after(header: Header, offset: usize) -> Self {
        match (offset < header.len(), header.is_complete()) {
            (true, _) => State::Replaying { header, offset },
            (false, true) => State::Forwarding,
            (false, false) => State::Exhausted,
        }
    }
}

impl<R: Read> Read for ReplayReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.state {
            State::Replaying { header, offset } => {
                let remaining = &header.as_bytes()[offset..];
                let n = remaining.len().min(buf.len());
                buf[..n].copy_from_slice(&remaining[..n]);
                self.state = State::after(header, offset + n);
                if !self.is_replaying() {
                    tracing::trace!(len = header.len(), "header replayed");
                }
                Ok(n)
            },
            State::Forwarding => self.source.read(buf),
            State::Exhausted => Ok(0),
        }
    }
}
