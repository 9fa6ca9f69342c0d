//! Mach-O load-command view used for display and section lookup.
//!
//! Backed by goblin. Only the pieces the scanner needs are kept: the entry
//! point and the file/VM ranges of each segment.

use goblin::mach::MachO;
use serde::Serialize;

use crate::error::{ScanError, ScanResult};
use crate::image::KernelImage;

/// File and VM extent of one segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentRange {
    pub name: String,
    pub vmaddr: u64,
    pub vmsize: u64,
    pub fileoff: u64,
    pub filesize: u64,
}

impl SegmentRange {
    fn contains_file_offset(&self, offset: u64) -> bool {
        offset >= self.fileoff && offset - self.fileoff < self.filesize
    }
}

#[derive(Debug, Clone, Default)]
pub struct MachLayout {
    entry_point: Option<u64>,
    segments: Vec<SegmentRange>,
}

impl MachLayout {
    /// Parse the load commands of a thin Mach-O.
    pub fn parse(bytes: &[u8]) -> ScanResult<Self> {
        let macho = MachO::parse(bytes, 0)
            .map_err(|e| ScanError::UnsupportedFormat(format!("Mach-O load commands: {e}")))?;

        let mut segments = Vec::new();
        for segment in &macho.segments {
            let name = segment.name().unwrap_or_default().to_string();
            segments.push(SegmentRange {
                name,
                vmaddr: segment.vmaddr,
                vmsize: segment.vmsize,
                fileoff: segment.fileoff,
                filesize: segment.filesize,
            });
        }

        let entry_point = if macho.entry != 0 { Some(macho.entry) } else { None };
        Ok(Self { entry_point, segments })
    }

    /// Declared entry point, if the image has a thread or main command.
    pub fn entry_point(&self) -> Option<u64> {
        self.entry_point
    }

    pub fn segments(&self) -> &[SegmentRange] {
        &self.segments
    }

    /// Where a file offset lands in the kernel's address space, if any segment maps it.
    pub fn file_offset_to_vm(&self, offset: usize) -> Option<u64> {
        let offset = offset as u64;
        self.segments
            .iter()
            .find(|seg| seg.contains_file_offset(offset))
            .map(|seg| seg.vmaddr + (offset - seg.fileoff))
    }

    pub fn find_segment(&self, name: &str) -> Option<&SegmentRange> {
        self.segments.iter().find(|seg| seg.name == name)
    }

    /// File bytes of the named segment, or `None` if there is no such segment.
    pub fn segment_bytes<'a>(
        &self,
        image: &KernelImage<'a>,
        name: &str,
    ) -> ScanResult<Option<&'a [u8]>> {
        let Some(seg) = self.find_segment(name) else {
            return Ok(None);
        };
        let out_of_bounds = || ScanError::OutOfBounds {
            offset: seg.fileoff as usize,
            len: seg.filesize as usize,
            size: image.len(),
        };
        let offset = usize::try_from(seg.fileoff).map_err(|_| out_of_bounds())?;
        let len = usize::try_from(seg.filesize).map_err(|_| out_of_bounds())?;
        image.window(offset, len).map(Some)
    }
}
