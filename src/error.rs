//! Error types for minitiff

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for minitiff operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading or writing a file
#[derive(Debug, Error)]
pub enum Error {
    /// The file could not be opened or created
    #[error("cannot open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Header byte-order marker or magic number is not recognized
    #[error("invalid header: byte order {byte_order:02X?}, magic {magic:02X?}")]
    InvalidHeader { byte_order: [u8; 2], magic: [u8; 2] },

    /// A tag carries a value outside the supported subset
    #[error("unsupported {tag}: {value}")]
    Unsupported { tag: &'static str, value: u32 },

    /// A field required to locate the pixel data was never seen
    #[error("incomplete directory: missing {0}")]
    IncompleteDirectory(&'static str),

    /// Bits per component did not resolve to 8, 16 or 32
    #[error("invalid bits per component: {0}")]
    InvalidBitsPerComponent(u32),

    /// Fewer bytes were available than requested
    #[error("short read: expected {expected} bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },

    /// Caller supplied parameters outside the supported subset
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Pixel data length does not match the raster layout
    #[error("pixel data length mismatch: expected {expected} bytes, got {actual}")]
    DataLength { expected: u64, actual: u64 },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    pub(crate) fn open(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Open {
            path: path.into(),
            source,
        }
    }
}
