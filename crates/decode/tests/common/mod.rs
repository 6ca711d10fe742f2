//! Sources with awkward read behaviour, and fixture encoding.

#![allow(dead_code)]

use sniffz_decode::Compression;
use std::io::{self, Read, Write};

/// Enough repetitive text for every codec to produce multiple reads.
pub fn lorem() -> Vec<u8> {
    let paragraph = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do eiusmod \
        tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis \
        nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.\n";
    paragraph.repeat(400)
}

pub fn compress(format: Compression, input: &[u8]) -> Vec<u8> {
    match format {
        Compression::None => input.to_vec(),
        Compression::Bzip2 => {
            let mut encoder = bzip2::write::BzEncoder::new(Vec::new(), bzip2::Compression::best());
            encoder.write_all(input).unwrap();
            encoder.finish().unwrap()
        },
        Compression::Gzip => {
            let mut encoder = flate2::write::GzEncoder::new(Vec::new(), flate2::Compression::best());
            encoder.write_all(input).unwrap();
            encoder.finish().unwrap()
        },
        Compression::Zstd => zstd::encode_all(input, 19).unwrap(),
    }
}

/// How a source hands out its bytes.
#[derive(Clone, Copy, Debug)]
pub enum Chunking {
    /// As much as asked for.
    Whole,
    /// Half of what was asked for (rounded up).
    Half,
    /// A single byte per read.
    OneByte,
    /// Interrupted on every other read, a single byte otherwise.
    Interrupted,
}

pub struct ChunkedReader<'a> {
    data: &'a [u8],
    chunking: Chunking,
    interrupt: bool,
}

impl<'a> ChunkedReader<'a> {
    pub fn new(data: &'a [u8], chunking: Chunking) -> Self {
        Self { data, chunking, interrupt: false }
    }
}

impl Read for ChunkedReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let limit = match self.chunking {
            Chunking::Whole => buf.len(),
            Chunking::Half => buf.len().div_ceil(2),
            Chunking::OneByte => buf.len().min(1),
            Chunking::Interrupted => {
                self.interrupt = !self.interrupt;
                if self.interrupt {
                    return Err(io::ErrorKind::Interrupted.into());
                }
                buf.len().min(1)
            },
        };
        self.data.read(&mut buf[..limit])
    }
}

/// Serves its data and a single end-of-stream; any read after that fails.
pub struct EofOnceReader<'a> {
    data: &'a [u8],
    pub reads: usize,
    eof: bool,
}

impl<'a> EofOnceReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, reads: 0, eof: false }
    }
}

impl Read for EofOnceReader<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.reads += 1;
        if self.data.is_empty() && !buf.is_empty() {
            if self.eof {
                return Err(io::Error::other("read after end-of-stream"));
            }
            self.eof = true;
        }
        self.data.read(buf)
    }
}

/// Fails every read.
pub struct FailingReader;

impl Read for FailingReader {
    fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::ConnectionReset, "connection reset by peer"))
    }
}
