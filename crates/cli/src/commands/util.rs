use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use trapscan_core::MappedImage;

use crate::resolve_image_path;

/// Map the kernel image at `path` read-only.
pub fn open_image(path: &str) -> Result<MappedImage> {
    let path = resolve_image_path(path)?;
    MappedImage::open(&path)
        .with_context(|| format!("Failed to map kernel image {}", path.display()))
}

/// Pretty-print any serializable value as JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let serialized = serde_json::to_string_pretty(value).context("Failed to serialize to JSON")?;
    println!("{}", serialized);
    Ok(())
}

pub fn print_lines(lines: &[String]) {
    for line in lines {
        println!("{}", line);
    }
}

/// Display form of a path for report headers.
pub fn display_path(path: &Path) -> String {
    path.display().to_string()
}
