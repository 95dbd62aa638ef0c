use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::io_utils::format_io_error;

/// Failures raised by a [`Codec`](crate::Codec) while transforming bytes.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum DvplError {
    /// Input shorter than the fixed footer.
    #[error("input is {0} bytes, too short to hold a DVPL footer")]
    TooShort(usize),

    /// Footer does not end with the `DVPL` marker.
    #[error("missing DVPL marker")]
    BadMagic,

    /// Footer's stored payload length disagrees with the actual payload.
    #[error("footer declares {declared} payload bytes but {actual} are present")]
    PayloadSizeMismatch { declared: u32, actual: usize },

    /// Payload checksum does not match the footer.
    #[error("CRC32 mismatch: footer has {expected:#010x}, payload hashes to {actual:#010x}")]
    CrcMismatch { expected: u32, actual: u32 },

    /// Unrecognised compression kind in the footer.
    #[error("unknown compression kind {0}")]
    UnknownKind(u32),

    /// Stored payloads must be exactly as long as the original.
    #[error("stored payload is {stored} bytes but the original size is {original}")]
    StoredSizeMismatch { stored: u32, original: u32 },

    /// LZ4 block failed to decode or decoded to the wrong length.
    #[error("LZ4 decode failed: {0}")]
    Lz4(String),

    /// Data too large for the 32-bit size fields.
    #[error("{0} bytes does not fit in a DVPL footer")]
    TooLarge(usize),
}

/// A single path that could not be converted.
///
/// The `Display` output is what gets reported to the user, so every variant
/// names the path it concerns.
#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("{}", format_io_error("reading metadata of", .path, .source))]
    Stat { path: PathBuf, source: io::Error },

    #[error("{}", format_io_error("listing directory", .path, .source))]
    ListDir { path: PathBuf, source: io::Error },

    #[error("{}", format_io_error("reading", .path, .source))]
    Read { path: PathBuf, source: io::Error },

    #[error("Error converting '{}': {}", .path.display(), .source)]
    Codec { path: PathBuf, source: DvplError },

    #[error("{}", format_io_error("writing", .path, .source))]
    Write { path: PathBuf, source: io::Error },

    #[error("{}", format_io_error("deleting", .path, .source))]
    Remove { path: PathBuf, source: io::Error },

    /// The argument could not be turned into an absolute path.
    #[error("Could not resolve '{}': {}", .path.display(), .source)]
    Resolve { path: PathBuf, source: io::Error },
}

/// Fatal configuration problems detected before any file is touched.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("No mode set. Pass -c to compress or -d to decompress. Use --help for more information.")]
    NoMode,

    #[error("Both -c and -d were given. Pick exactly one mode.")]
    ConflictingModes,

    #[error("No paths specified. Use --help for more information.")]
    NoPaths,
}

impl ConfigError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConfigError::NoMode | ConfigError::ConflictingModes => 1,
            ConfigError::NoPaths => 2,
        }
    }
}
