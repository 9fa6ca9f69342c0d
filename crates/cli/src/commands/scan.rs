use std::path::Path;

use anyhow::{anyhow, Context, Result};
use chrono::Utc;
use serde::Serialize;
use trapscan_core::format::detect_format;
use trapscan_core::report::render_report;
use trapscan_core::scan::load_layout;
use trapscan_core::{scan_image, KernelReport, ScanOptions};

use crate::commands::{display_path, open_image, print_json, print_lines};
use crate::sha256_bytes;

/// Command-line overrides applied on top of the config file (or defaults).
#[derive(Debug, Clone, Default)]
pub struct ScanFlags {
    pub no_unix: bool,
    pub no_mach: bool,
    pub no_kexts: bool,
    pub show_all: bool,
    pub prelink_segment: Option<String>,
}

/// JSON envelope for `scan --json`.
#[derive(Debug, Serialize)]
pub struct ScanOutput<'a> {
    pub path: String,
    pub size: usize,
    pub sha256: String,
    pub scanned_at: String,
    pub options: &'a ScanOptions,
    pub report: &'a KernelReport,
}

/// Load options from `config` (if given) and apply the flag overrides.
pub fn resolve_scan_options(config: Option<&str>, flags: &ScanFlags) -> Result<ScanOptions> {
    let mut options = match config {
        Some(path) => ScanOptions::load(Path::new(path))?,
        None => ScanOptions::default(),
    };
    if flags.no_unix {
        options.unix_table = false;
    }
    if flags.no_mach {
        options.mach_traps = false;
    }
    if flags.no_kexts {
        options.kexts = false;
    }
    if flags.show_all {
        options.suppress_unimplemented = false;
    }
    if let Some(segment) = &flags.prelink_segment {
        options.prelink_segment = segment.clone();
    }
    Ok(options)
}

/// Scan a kernel image and print its syscall table, Mach traps and kexts.
///
/// Partial results are printed before failing when either table could not be located.
pub fn scan_command(path: &str, config: Option<&str>, flags: &ScanFlags, json: bool) -> Result<()> {
    let options = resolve_scan_options(config, flags)?;
    let mapped = open_image(path)?;
    let image = mapped.image();

    // Only parse load commands once the header is known to be a thin Mach-O.
    detect_format(&image)
        .with_context(|| format!("Failed to scan {}", mapped.path().display()))?;
    let layout = load_layout(&image);
    let report = scan_image(&image, layout.as_ref(), &options)
        .with_context(|| format!("Failed to scan {}", mapped.path().display()))?;

    if json {
        let output = ScanOutput {
            path: display_path(mapped.path()),
            size: image.len(),
            sha256: sha256_bytes(image.bytes()),
            scanned_at: Utc::now().to_rfc3339(),
            options: &options,
            report: &report,
        };
        print_json(&output)?;
    } else {
        print_lines(&render_report(&report, &options));
    }

    let failures = report.failures();
    if !failures.is_empty() {
        let summary: Vec<String> =
            failures.iter().map(|(kind, error)| format!("{}: {}", kind.symbol(), error)).collect();
        return Err(anyhow!("Incomplete scan: {}", summary.join("; ")));
    }

    Ok(())
}
