use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

/// Segment that carries the prelinked kext property list in a kernel cache.
pub const DEFAULT_PRELINK_SEGMENT: &str = "__PRELINK_INFO";

/// Which parts of the pipeline run and how the text report is filtered.
///
/// Every field has a default, so a config file only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanOptions {
    /// Locate and decode `sysent`.
    pub unix_table: bool,
    /// Locate and decode `mach_trap_table`.
    pub mach_traps: bool,
    /// List kernel extensions from the prelink segment.
    pub kexts: bool,
    /// Leave suppressed and `kern_invalid` entries out of the text report.
    pub suppress_unimplemented: bool,
    /// Segment holding the kext property list.
    pub prelink_segment: String,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            unix_table: true,
            mach_traps: true,
            kexts: true,
            suppress_unimplemented: true,
            prelink_segment: DEFAULT_PRELINK_SEGMENT.to_string(),
        }
    }
}

impl ScanOptions {
    /// Load options from a `.json`, `.yaml` or `.yml` file.
    pub fn load(path: &Path) -> Result<Self> {
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read scan config {}", path.display()))?;
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        match ext {
            "json" => serde_json::from_str(&body)
                .with_context(|| format!("Failed to parse JSON config {}", path.display())),
            "yaml" | "yml" => serde_yaml::from_str(&body)
                .with_context(|| format!("Failed to parse YAML config {}", path.display())),
            other => Err(anyhow!(
                "Unsupported config extension '{}' for {}. Allowed: json, yaml, yml",
                other,
                path.display()
            )),
        }
    }
}
