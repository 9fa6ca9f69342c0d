//! Decoding of located dispatch tables into per-index entries.

pub mod names;

use log::{debug, warn};
use serde::Serialize;

use crate::error::{ScanError, ScanResult};
use crate::image::KernelImage;
use crate::signatures::{MACH_TRAP_STRIDE, SYSENT_STRIDE};

pub use names::{KERN_INVALID, MACH_TRAP_COUNT, MACH_TRAP_NAMES, SYSCALL_COUNT, SYSCALL_NAMES};

/// The two tables this crate knows how to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TableKind {
    UnixSyscalls,
    MachTraps,
}

impl TableKind {
    /// Kernel symbol of the table.
    pub fn symbol(self) -> &'static str {
        match self {
            TableKind::UnixSyscalls => "sysent",
            TableKind::MachTraps => "mach_trap_table",
        }
    }

    pub fn layout(self) -> TableLayout {
        match self {
            TableKind::UnixSyscalls => TableLayout {
                stride: SYSENT_STRIDE,
                address_offset: 20,
                count: SYSCALL_COUNT,
                // `enosys` sits in slot 8 (old creat).
                sentinel_index: 8,
            },
            TableKind::MachTraps => TableLayout {
                stride: MACH_TRAP_STRIDE,
                address_offset: 4,
                count: MACH_TRAP_COUNT,
                sentinel_index: 0,
            },
        }
    }

    pub fn names(self) -> &'static [&'static str] {
        match self {
            TableKind::UnixSyscalls => &SYSCALL_NAMES,
            TableKind::MachTraps => &MACH_TRAP_NAMES,
        }
    }
}

/// Record geometry of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableLayout {
    /// Bytes between consecutive records.
    pub stride: usize,
    /// Offset of the handler address inside a record.
    pub address_offset: usize,
    /// Number of records to decode.
    pub count: usize,
    /// Record whose handler is the "not implemented" routine (`enosys` / `kern_invalid`).
    pub sentinel_index: usize,
}

impl TableLayout {
    fn address_at(&self, image: &KernelImage<'_>, base: usize, index: usize) -> ScanResult<u32> {
        let offset = index
            .checked_mul(self.stride)
            .and_then(|rel| rel.checked_add(self.address_offset))
            .and_then(|rel| base.checked_add(rel))
            .ok_or(ScanError::OutOfBounds { offset: base, len: 4, size: image.len() })?;
        image.read_u32(offset)
    }

    /// Raw handler address of the sentinel record.
    pub fn sentinel_address(&self, image: &KernelImage<'_>, base: usize) -> ScanResult<u32> {
        self.address_at(image, base, self.sentinel_index)
    }
}

/// One decoded table slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableEntry {
    pub index: u32,
    /// Handler address exactly as stored.
    pub raw_address: u32,
    /// Handler address with the Thumb bit cleared.
    pub address: u32,
    pub is_thumb: bool,
    /// Still not word or halfword aligned after Thumb correction.
    pub misaligned: bool,
    pub name: String,
    /// Handler equals the table's sentinel address.
    pub suppressed: bool,
}

impl TableEntry {
    /// Whether the entry points at an implemented handler.
    pub fn is_implemented(&self) -> bool {
        !self.suppressed && self.name != KERN_INVALID
    }
}

/// Strip the ARM Thumb bit.
///
/// Returns the address with bit 0 clear and whether it was set. Applying this to
/// its own output is a no-op.
pub fn correct_thumb_bit(raw: u32) -> (u32, bool) {
    (raw & !1, raw & 1 == 1)
}

/// Decode the table at `base` with its kind's standard layout and names.
pub fn decode_table(
    image: &KernelImage<'_>,
    kind: TableKind,
    base: usize,
) -> ScanResult<Vec<TableEntry>> {
    decode_with_layout(image, base, &kind.layout(), kind.names())
}

/// Decode `layout.count` records starting at `base`.
///
/// Every index produces exactly one entry, in table order. Entries equal to the
/// sentinel are marked `suppressed` but kept; filtering is left to presentation.
pub fn decode_with_layout(
    image: &KernelImage<'_>,
    base: usize,
    layout: &TableLayout,
    names: &[&str],
) -> ScanResult<Vec<TableEntry>> {
    let sentinel = layout.sentinel_address(image, base)?;
    debug!("Sentinel handler for table at {base:#x} is {sentinel:#x}");

    let mut entries = Vec::with_capacity(layout.count);
    for index in 0..layout.count {
        let raw_address = layout.address_at(image, base, index)?;
        let (address, is_thumb) = correct_thumb_bit(raw_address);
        let misaligned = address % 4 != 0;
        if misaligned {
            warn!("Entry {index} has odd handler address {raw_address:#x}");
        }
        let name = match names.get(index) {
            Some(name) => (*name).to_string(),
            None => format!("<unnamed {index}>"),
        };

        entries.push(TableEntry {
            index: index as u32,
            raw_address,
            address,
            is_thumb,
            misaligned,
            name,
            suppressed: raw_address == sentinel,
        });
    }

    Ok(entries)
}
