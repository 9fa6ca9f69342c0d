//! Plain-text rendering of a `KernelReport`.

use crate::kext::KextDescriptor;
use crate::options::ScanOptions;
use crate::scan::{DecodedTable, KernelReport, TableOutcome};
use crate::signatures::TableLocation;
use crate::tables::{TableEntry, TableKind};

/// One report line for a table slot: index, padded name, address and Thumb flag.
pub fn format_entry(kind: TableKind, entry: &TableEntry) -> String {
    let flag = if entry.is_thumb { 'T' } else { '-' };
    match kind {
        TableKind::UnixSyscalls => {
            format!("{}. {:<20} {:x} {}", entry.index, entry.name, entry.address, flag)
        }
        TableKind::MachTraps => {
            format!("{:>3} {:<40} {:x} {}", entry.index, entry.name, entry.address, flag)
        }
    }
}

/// Where a table was found, in the file and (if known) in memory.
pub fn format_location(location: &TableLocation, virtual_address: Option<u64>) -> String {
    let vm = match virtual_address {
        Some(vm) => format!("{vm:#x}"),
        None => "?".to_string(),
    };
    format!(
        "{} offset in file/memory (for patching purposes): {:#x}/{}",
        location.kind.symbol(),
        location.offset,
        vm
    )
}

pub fn format_kext(kext: &KextDescriptor) -> String {
    match &kext.identifier {
        Some(identifier) => format!("Kext: {} ({})", kext.name, identifier),
        None => format!("Kext: {}", kext.name),
    }
}

fn sentinel_line(kind: TableKind, sentinel: u32) -> String {
    match kind {
        TableKind::UnixSyscalls => format!("Suppressing enosys ({sentinel:#x})"),
        TableKind::MachTraps => format!("Kern invalid should be {sentinel:#x}. Ignoring those"),
    }
}

/// Lines for one decoded table. With `suppress_unimplemented`, entries that
/// resolve to the sentinel or are named `kern_invalid` are left out.
pub fn table_lines(table: &DecodedTable, suppress_unimplemented: bool) -> Vec<String> {
    let kind = table.location.kind;
    let mut lines = Vec::with_capacity(table.entries.len() + 1);
    if suppress_unimplemented {
        lines.push(sentinel_line(kind, table.sentinel));
    }
    lines.extend(
        table
            .entries
            .iter()
            .filter(|entry| !suppress_unimplemented || entry.is_implemented())
            .map(|entry| format_entry(kind, entry)),
    );
    lines
}

/// Render the whole report in the order a reader expects: header facts, table
/// locations, then each table's entries, then kexts.
pub fn render_report(report: &KernelReport, options: &ScanOptions) -> Vec<String> {
    let mut lines = Vec::new();

    let arch = &report.architecture;
    if arch.verified {
        lines.push("This is an ARM binary. Applying iOS kernel signatures".to_string());
    } else {
        lines.push(format!("CPU type {} is not ARM; results are unverified", arch.cputype));
    }
    match report.entry_point {
        Some(entry) => lines.push(format!("Entry point is {entry:#x}")),
        None => lines.push("Entry point is unknown".to_string()),
    }
    lines.push(format!("This appears to be XNU {}", report.version));

    let tables = [
        (TableKind::UnixSyscalls, &report.sysent),
        (TableKind::MachTraps, &report.mach_traps),
    ];
    for (kind, outcome) in &tables {
        match outcome {
            TableOutcome::Decoded(table) => {
                lines.push(format_location(&table.location, table.virtual_address))
            }
            TableOutcome::Failed { error } => {
                lines.push(format!("{}: {}", kind.symbol(), error))
            }
            TableOutcome::Skipped => {}
        }
    }
    for (_, outcome) in &tables {
        if let Some(table) = outcome.decoded() {
            lines.extend(table_lines(table, options.suppress_unimplemented));
        }
    }

    if let Some(kexts) = &report.kexts {
        lines.extend(kexts.iter().map(format_kext));
        lines.push(format!("Got {} kexts. done", kexts.len()));
    }

    lines
}
