use std::path::PathBuf;

use thiserror::Error;

/// Error type for every scan over a kernel image.
#[derive(Debug, Error)]
pub enum ScanError {
    /// Wrong magic, fat binary, or otherwise not a 32-bit Mach-O we can read.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// The XNU build-path string is absent; the image is presumably not a kernel.
    #[error("XNU version signature not found; this does not look like a kernel")]
    SignatureNotFound,

    /// A table's structural signature never matched anywhere in the image.
    #[error("Unable to locate {0}")]
    TableNotFound(&'static str),

    /// A read of `len` bytes at `offset` would run past the end of an image of `size` bytes.
    ///
    /// Raised instead of reading out of range, so truncated images and heuristics that
    /// drift toward the end of the buffer fail cleanly.
    #[error("Read of {len} bytes at offset {offset:#x} exceeds image size {size:#x}")]
    OutOfBounds { offset: usize, len: usize, size: usize },

    /// Opening or mapping the image file failed.
    #[error("Failed to open image {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Convenience result type for scan operations.
pub type ScanResult<T> = Result<T, ScanError>;
