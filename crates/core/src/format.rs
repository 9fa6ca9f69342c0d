//! Mach-O header check run before any signature scan.

use log::warn;
use serde::Serialize;

use crate::error::{ScanError, ScanResult};
use crate::image::KernelImage;

/// 32-bit Mach-O magic as read little-endian from disk.
pub const MH_MAGIC: u32 = 0xFEED_FACE;
/// `FAT_MAGIC` (0xCAFEBABE) stored big-endian, read back little-endian.
pub const FAT_CIGAM: u32 = 0xBEBA_FECA;
/// `CPU_TYPE_ARM` from `<mach/machine.h>`.
pub const CPU_TYPE_ARM: u32 = 12;

/// What the header says about the image.
///
/// Word size and byte order are fixed: only 32-bit little-endian images get this far.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchitectureInfo {
    pub magic: u32,
    pub cputype: u32,
    pub word_size: u32,
    pub little_endian: bool,
    /// `false` when the magic is valid but the CPU type is not ARM. The signatures
    /// below were only ever tuned for ARM kernels.
    pub verified: bool,
}

impl ArchitectureInfo {
    pub fn is_arm(&self) -> bool {
        self.cputype == CPU_TYPE_ARM
    }
}

/// Validate the header at offset 0.
///
/// Fat binaries and unknown magics are rejected; a 32-bit Mach-O for another CPU
/// is accepted but flagged as unverified.
pub fn detect_format(image: &KernelImage<'_>) -> ScanResult<ArchitectureInfo> {
    let magic = image.read_u32(0)?;
    match magic {
        MH_MAGIC => {
            let cputype = image.read_u32(4)?;
            let verified = cputype == CPU_TYPE_ARM;
            if !verified {
                warn!("Mach-O CPU type {cputype} is not ARM; kernel signatures are unverified");
            }
            Ok(ArchitectureInfo { magic, cputype, word_size: 32, little_endian: true, verified })
        }
        FAT_CIGAM => Err(ScanError::UnsupportedFormat("fat binary".to_string())),
        other => Err(ScanError::UnsupportedFormat(format!("unknown magic {other:#010x}"))),
    }
}
