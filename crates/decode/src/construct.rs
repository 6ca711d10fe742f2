use crate::Compression;

const GZIP_MAGIC: [u8; 2] = [0x1F, 0x8B];
const ZSTD_MAGIC: [u8; 4] = [0x28, 0xB5, 0x2F, 0xFD];
// "BZh", followed by the block size level ('1' to '9').
const BZIP2_MAGIC: [u8; 3] = [0x42, 0x5A, 0x68];
const BZIP2_LEVELS: std::ops::RangeInclusive<u8> = b'1'..=b'9';

impl From<&[u8]> for Compression {
    fn from(value: &[u8]) -> Self {
        Compression::from_magic_bytes(value)
    }
}

impl Compression {
    /// Detect compression format from magic bytes.
    ///
    /// Checks gzip, then zstd, then bzip2; the first match wins. Returns the
    /// `None` variant if no magic bytes match or if the input is too short to
    /// hold the magic bytes of any format (gzip needs two bytes, zstd and
    /// bzip2 need four).
    #[must_use]
    pub fn from_magic_bytes(bytes: &[u8]) -> Self {
        if bytes.starts_with(&GZIP_MAGIC) {
            return Compression::Gzip;
        }
        if bytes.starts_with(&ZSTD_MAGIC) {
            return Compression::Zstd;
        }
        if bytes.starts_with(&BZIP2_MAGIC)
            && bytes.get(BZIP2_MAGIC.len()).is_some_and(|level| BZIP2_LEVELS.contains(level))
        {
            return Compression::Bzip2;
        }
        Compression::None
    }
}
