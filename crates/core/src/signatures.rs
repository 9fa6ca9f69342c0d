//! Sliding-window locators for the two dispatch tables.
//!
//! Neither table has a directory entry or magic cookie. Both are recognized by
//! the regular shape of their opening records, which held for the kernels these
//! patterns were taken from. The patterns are literal constants on purpose.

use serde::Serialize;

use crate::error::{ScanError, ScanResult};
use crate::image::KernelImage;
use crate::tables::TableKind;

/// Offsets within this many bytes of the image end are never scanned.
pub const SCAN_TAIL: usize = 50;

/// `sysent[1]`: four zero words, then a word equal to 1.
pub const SYSENT_FIRST_RECORD: [u8; 20] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x01, 0x00, 0x00, 0x00,
];

/// `sysent[2]`, one record later: three zero words, then a word equal to 4.
pub const SYSENT_SECOND_RECORD: [u8; 16] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, //
    0x00, 0x00, 0x00, 0x00, 0x04, 0x00, 0x00, 0x00,
];

/// Distance between consecutive `sysent` records.
pub const SYSENT_STRIDE: usize = 24;

/// Bytes a `sysent` candidate reads past its own offset.
const SYSENT_EXTENT: usize = SYSENT_STRIDE + SYSENT_SECOND_RECORD.len();

/// Size of a `mach_trap_table` record.
pub const MACH_TRAP_STRIDE: usize = 8;

/// Prefix lengths compared against the same bytes one prefix further on.
/// Together they demand five bit-identical leading records.
const MACH_REPEAT_SPANS: [usize; 5] = [40, 32, 24, 16, 8];

/// Bytes a Mach trap candidate reads past its own offset.
const MACH_EXTENT: usize = 2 * MACH_REPEAT_SPANS[0];

/// Where a table starts in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableLocation {
    pub kind: TableKind,
    pub offset: usize,
}

/// Locate `sysent`.
///
/// The match is on `sysent[1]` followed by `sysent[2]`; the reported base is one
/// record earlier so that `syscall` (index 0) is included. The first match wins.
pub fn locate_sysent(image: &KernelImage<'_>) -> ScanResult<TableLocation> {
    let limit = image.scan_limit(SCAN_TAIL, SYSENT_EXTENT)?;

    for i in 0..limit {
        if image.window(i, SYSENT_FIRST_RECORD.len())? != SYSENT_FIRST_RECORD {
            continue;
        }
        if image.window(i + SYSENT_STRIDE, SYSENT_SECOND_RECORD.len())? != SYSENT_SECOND_RECORD {
            continue;
        }
        // A base before offset 0 cannot be a table.
        let Some(base) = i.checked_sub(SYSENT_STRIDE) else { continue };
        return Ok(TableLocation { kind: TableKind::UnixSyscalls, offset: base });
    }

    Err(ScanError::TableNotFound(TableKind::UnixSyscalls.symbol()))
}

/// Locate `mach_trap_table` by its opening run of identical `kern_invalid` records.
///
/// Each of those records has a zero argument-count word and a nonzero handler
/// pointer. The first match wins.
pub fn locate_mach_trap_table(image: &KernelImage<'_>) -> ScanResult<TableLocation> {
    let limit = image.scan_limit(SCAN_TAIL, MACH_EXTENT)?;

    for i in 0..limit {
        if image.read_u32(i)? != 0 || image.read_u32(i + 4)? == 0 {
            continue;
        }
        if repeats_at(image, i)? {
            return Ok(TableLocation { kind: TableKind::MachTraps, offset: i });
        }
    }

    Err(ScanError::TableNotFound(TableKind::MachTraps.symbol()))
}

fn repeats_at(image: &KernelImage<'_>, i: usize) -> ScanResult<bool> {
    for span in MACH_REPEAT_SPANS {
        if image.window(i, span)? != image.window(i + span, span)? {
            return Ok(false);
        }
    }
    Ok(true)
}
