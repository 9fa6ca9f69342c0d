use anyhow::{Context, Result};
use serde::Serialize;
use trapscan_core::format::{detect_format, ArchitectureInfo};
use trapscan_core::scan::load_layout;
use trapscan_core::version::{find_version_signature, VersionSignature};

use crate::commands::{display_path, open_image, print_json};
use crate::sha256_bytes;

#[derive(Debug, Serialize)]
pub struct ImageInfo {
    pub path: String,
    pub size: usize,
    pub sha256: String,
    pub architecture: ArchitectureInfo,
    pub version: VersionSignature,
    pub entry_point: Option<u64>,
}

/// Identify an image without scanning for tables.
pub fn info_command(path: &str, json: bool) -> Result<()> {
    let mapped = open_image(path)?;
    let image = mapped.image();

    let architecture = detect_format(&image)
        .with_context(|| format!("Failed to read header of {}", mapped.path().display()))?;
    let version = find_version_signature(&image)
        .with_context(|| format!("Failed to identify {}", mapped.path().display()))?;
    let entry_point = load_layout(&image).and_then(|layout| layout.entry_point());

    let info = ImageInfo {
        path: display_path(mapped.path()),
        size: image.len(),
        sha256: sha256_bytes(image.bytes()),
        architecture,
        version,
        entry_point,
    };

    if json {
        return print_json(&info);
    }

    println!("Kernel Image Info");
    println!("=================");
    println!("Path: {}", info.path);
    println!("Size: {} bytes", info.size);
    println!("SHA-256: {}", info.sha256);
    println!(
        "CPU type: {}{}",
        info.architecture.cputype,
        if info.architecture.verified { " (ARM)" } else { " (unverified)" }
    );
    println!("XNU version: {}", info.version);
    match info.entry_point {
        Some(entry) => println!("Entry point: {entry:#x}"),
        None => println!("Entry point: (unknown)"),
    }

    Ok(())
}
