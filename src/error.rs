//! Contains the Error and Result type used by the decoder.

/// The ways a decode can fail. Every failure aborts the whole decode; a
/// malformed document never yields a partial tree.
#[derive(Debug)]
pub enum Error {
    /// The input was zero bytes long.
    EmptyInput,
    /// The document did not start with a Compound tag. Carries the byte found
    /// instead, which helps identify what the input actually was.
    InvalidRootTag(u8),
    /// A tag type byte outside the known 0..=11 range.
    UnknownTag(u8),
    /// A ByteArray, IntArray or List declared a negative length.
    NegativeLength(i32),
    /// Ran out of input part way through a value.
    UnexpectedEof,
    /// A string payload was not valid UTF-8.
    NonunicodeString,
    /// Containers nested deeper than the decoder's depth ceiling (512).
    DepthLimitExceeded,
    /// Input had the gzip magic but the stream would not decompress.
    Decompression(std::io::Error),
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::EmptyInput => f.write_str("invalid nbt: input is empty"),
            Error::InvalidRootTag(b) => {
                f.write_fmt(format_args!("invalid nbt: no root compound, found 0x{b:02x}"))
            }
            Error::UnknownTag(b) => f.write_fmt(format_args!("invalid nbt tag value: {b}")),
            Error::NegativeLength(len) => {
                f.write_fmt(format_args!("invalid nbt: negative length: {len}"))
            }
            Error::UnexpectedEof => f.write_str("eof: unexpectedly ran out of input"),
            Error::NonunicodeString => f.write_str("invalid nbt string: not unicode"),
            Error::DepthLimitExceeded => f.write_str("invalid nbt: nested too deeply"),
            Error::Decompression(e) => f.write_fmt(format_args!("gzip error: {e}")),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Decompression(e) => Some(e),
            _ => None,
        }
    }
}
