//! Read-only views over a kernel image.
//!
//! `KernelImage` is the borrowed view every scanner works against. All reads go
//! through `window`/`read_u32`, which range-check against the image length and
//! return `ScanError::OutOfBounds` instead of reading past the buffer.

use std::fs;
use std::path::{Path, PathBuf};

use memmap2::Mmap;

use crate::error::{ScanError, ScanResult};

/// Borrowed, bounds-checked view of an image's bytes.
#[derive(Debug, Clone, Copy)]
pub struct KernelImage<'a> {
    bytes: &'a [u8],
}

impl<'a> KernelImage<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self { bytes }
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn bytes(&self) -> &'a [u8] {
        self.bytes
    }

    /// Return `len` bytes starting at `offset`, or `OutOfBounds` if any of them is missing.
    pub fn window(&self, offset: usize, len: usize) -> ScanResult<&'a [u8]> {
        let end = offset.checked_add(len).ok_or_else(|| self.out_of_bounds(offset, len))?;
        self.bytes.get(offset..end).ok_or_else(|| self.out_of_bounds(offset, len))
    }

    /// Read a little-endian 32-bit word at `offset`.
    pub fn read_u32(&self, offset: usize) -> ScanResult<u32> {
        let word = self.window(offset, 4)?;
        Ok(u32::from_le_bytes([word[0], word[1], word[2], word[3]]))
    }

    /// Number of candidate offsets a sliding scan may visit.
    ///
    /// A candidate `i` must satisfy `i < len - tail` and `i + extent <= len`.
    /// Images too short to hold a single candidate fail with `OutOfBounds`.
    pub fn scan_limit(&self, tail: usize, extent: usize) -> ScanResult<usize> {
        let by_tail = self.len().checked_sub(tail);
        let by_extent = (self.len() + 1).checked_sub(extent);
        match (by_tail, by_extent) {
            (Some(a), Some(b)) if a.min(b) > 0 => Ok(a.min(b)),
            _ => Err(self.out_of_bounds(0, extent.max(tail + 1))),
        }
    }

    fn out_of_bounds(&self, offset: usize, len: usize) -> ScanError {
        ScanError::OutOfBounds { offset, len, size: self.len() }
    }
}

/// An image file mapped read-only into memory.
pub struct MappedImage {
    path: PathBuf,
    map: Mmap,
}

impl MappedImage {
    /// Map the file at `path`. Fails with `ScanError::Io` on a missing file or I/O error.
    pub fn open(path: impl AsRef<Path>) -> ScanResult<Self> {
        let path = path.as_ref().to_path_buf();
        let file =
            fs::File::open(&path).map_err(|source| ScanError::Io { path: path.clone(), source })?;
        // SAFETY: the mapping is read-only and never outlives `self`; concurrent
        // truncation of the file by another process is outside our control.
        let map = unsafe { Mmap::map(&file) }
            .map_err(|source| ScanError::Io { path: path.clone(), source })?;
        Ok(Self { path, map })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn image(&self) -> KernelImage<'_> {
        KernelImage::new(&self.map)
    }
}

/// Position of the first occurrence of `needle` in `haystack` at or after `from`.
pub fn find_bytes(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    if needle.is_empty() || from > haystack.len() {
        return None;
    }
    haystack[from..].windows(needle.len()).position(|w| w == needle).map(|pos| from + pos)
}
