//! Transparent decompression with automatic format detection.
//!
//! Hand [`reader`] any [`Read`](std::io::Read)er and get back a
//! [`DecodingReader`] that yields the decompressed content, whatever the
//! source was compressed with, or the original bytes if it wasn't compressed
//! at all:
//!
//! - **Detection** reads a fixed [`HEADER_LEN`]-byte header from the source
//!   ([`Header::peek`]) and matches it against known magic bytes
//!   ([`Compression::from_magic_bytes`])
//! - **Replay** feeds the consumed header back to whichever consumer was
//!   picked, so sources never need to support seeking ([`ReplayReader`])
//! - **Decoding** wraps the replayed stream in the matching decoder behind a
//!   single readable, closeable type ([`DecodingReader`], [`Close`])
//!
//! Detection is magic-byte based only. It is entirely possible to trick it
//! into treating plain data as compressed; the decoder will then report the
//! data as invalid.
//!
//! ```
//! use std::io::Read;
//!
//! let mut reader = sniffz_decode::reader(&b"just some text"[..]).unwrap();
//! let mut output = String::new();
//! reader.read_to_string(&mut output).unwrap();
//! assert_eq!(output, "just some text");
//! ```

mod construct;
pub mod error;
mod header;
mod ops;
mod reader;
mod replay;
mod util;

pub use crate::header::{HEADER_LEN, Header};
pub use crate::ops::decompress;
pub use crate::reader::{Close, CloseAction, DecodingReader, reader};
pub use crate::replay::ReplayReader;

/// A compression format recognised from its magic bytes.
///
/// Defaults to [`None`](Self::None) (uncompressed, passed through as-is).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Compression {
    /// Uncompressed, or compressed with an unrecognised format
    #[default]
    None,
    /// Bzip2 compression (.bz2)
    Bzip2,
    /// Gzip compression (.gz)
    Gzip,
    /// Zstd compression (.zst)
    Zstd,
}

#[cfg(test)]
mod tests {
    use crate::Compression;

    #[test]
    fn compression_default() {
        assert_eq!(Compression::default(), Compression::None);
    }
}
