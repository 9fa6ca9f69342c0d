//! The scan pipeline: format check, version string, both tables, kexts.
//!
//! Format detection and the version signature are fatal. After that each table
//! is located and decoded independently, so a missing `sysent` still leaves the
//! Mach trap table (and the kext list) in the report.

use log::{debug, warn};
use serde::Serialize;

use crate::error::ScanResult;
use crate::format::{detect_format, ArchitectureInfo};
use crate::image::KernelImage;
use crate::kext::{extract_kexts, KextDescriptor};
use crate::macho::MachLayout;
use crate::options::ScanOptions;
use crate::signatures::{locate_mach_trap_table, locate_sysent, TableLocation};
use crate::tables::{decode_table, TableEntry, TableKind};
use crate::version::{find_version_signature, VersionSignature};

/// A located and decoded table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DecodedTable {
    pub location: TableLocation,
    /// Where the table lives in the running kernel, when a segment maps its offset.
    pub virtual_address: Option<u64>,
    /// Handler address treated as "not implemented".
    pub sentinel: u32,
    pub entries: Vec<TableEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum TableOutcome {
    Decoded(DecodedTable),
    Failed { error: String },
    Skipped,
}

impl TableOutcome {
    pub fn decoded(&self) -> Option<&DecodedTable> {
        match self {
            TableOutcome::Decoded(table) => Some(table),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            TableOutcome::Failed { error } => Some(error),
            _ => None,
        }
    }
}

/// Everything learned from one image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KernelReport {
    pub architecture: ArchitectureInfo,
    pub version: VersionSignature,
    pub entry_point: Option<u64>,
    pub sysent: TableOutcome,
    pub mach_traps: TableOutcome,
    /// `None` when kexts were not requested or the prelink segment is unavailable.
    pub kexts: Option<Vec<KextDescriptor>>,
}

impl KernelReport {
    pub fn table(&self, kind: TableKind) -> &TableOutcome {
        match kind {
            TableKind::UnixSyscalls => &self.sysent,
            TableKind::MachTraps => &self.mach_traps,
        }
    }

    /// Tables that were requested but could not be produced, with their errors.
    pub fn failures(&self) -> Vec<(TableKind, &str)> {
        [TableKind::UnixSyscalls, TableKind::MachTraps]
            .into_iter()
            .filter_map(|kind| self.table(kind).error().map(|e| (kind, e)))
            .collect()
    }
}

/// Parse the Mach-O load commands, logging instead of failing when goblin
/// cannot make sense of them; the signature scans do not need them.
pub fn load_layout(image: &KernelImage<'_>) -> Option<MachLayout> {
    match MachLayout::parse(image.bytes()) {
        Ok(layout) => Some(layout),
        Err(err) => {
            warn!("Cannot read segment layout ({err}); addresses and kexts unavailable");
            None
        }
    }
}

/// Run the whole pipeline over `image`.
pub fn scan_image(
    image: &KernelImage<'_>,
    layout: Option<&MachLayout>,
    options: &ScanOptions,
) -> ScanResult<KernelReport> {
    let architecture = detect_format(image)?;
    if architecture.is_arm() {
        debug!("This is an ARM binary. Applying iOS kernel signatures");
    }

    let entry_point = layout.and_then(MachLayout::entry_point);
    let version = find_version_signature(image)?;
    debug!("This appears to be XNU {version}");

    // Locate both tables before decoding either.
    let sysent = options.unix_table.then(|| locate(image, layout, locate_sysent));
    let mach_traps = options.mach_traps.then(|| locate(image, layout, locate_mach_trap_table));

    let sysent = decode(image, sysent);
    let mach_traps = decode(image, mach_traps);

    let kexts = if options.kexts {
        layout.and_then(|layout| kexts_from(image, layout, &options.prelink_segment))
    } else {
        None
    };

    Ok(KernelReport { architecture, version, entry_point, sysent, mach_traps, kexts })
}

type Located = ScanResult<(TableLocation, Option<u64>)>;

fn locate(
    image: &KernelImage<'_>,
    layout: Option<&MachLayout>,
    locator: fn(&KernelImage<'_>) -> ScanResult<TableLocation>,
) -> Located {
    let location = locator(image)?;
    let virtual_address = layout.and_then(|l| l.file_offset_to_vm(location.offset));
    match virtual_address {
        Some(vm) => debug!(
            "{} offset in file/memory (for patching purposes): {:#x}/{:#x}",
            location.kind.symbol(),
            location.offset,
            vm
        ),
        None => debug!(
            "{} offset in file (for patching purposes): {:#x}",
            location.kind.symbol(),
            location.offset
        ),
    }
    Ok((location, virtual_address))
}

fn decode(image: &KernelImage<'_>, located: Option<Located>) -> TableOutcome {
    let Some(located) = located else {
        return TableOutcome::Skipped;
    };
    let result = located.and_then(|(location, virtual_address)| {
        let layout = location.kind.layout();
        let sentinel = layout.sentinel_address(image, location.offset)?;
        let entries = decode_table(image, location.kind, location.offset)?;
        Ok(DecodedTable { location, virtual_address, sentinel, entries })
    });
    match result {
        Ok(table) => TableOutcome::Decoded(table),
        Err(err) => {
            warn!("{err}");
            TableOutcome::Failed { error: err.to_string() }
        }
    }
}

fn kexts_from(
    image: &KernelImage<'_>,
    layout: &MachLayout,
    segment: &str,
) -> Option<Vec<KextDescriptor>> {
    match layout.segment_bytes(image, segment) {
        Ok(Some(blob)) => Some(extract_kexts(blob)),
        Ok(None) => {
            warn!("No {segment} segment; skipping kexts");
            None
        }
        Err(err) => {
            warn!("Cannot read {segment}: {err}");
            None
        }
    }
}
