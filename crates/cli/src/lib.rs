pub mod commands;

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use sha2::{Digest, Sha256};

/// SHA-256 of a byte buffer as a lowercase hex string.
pub fn sha256_bytes(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

/// Resolve the image path and make sure it names an existing file.
pub fn resolve_image_path(path: &str) -> Result<PathBuf> {
    let input = Path::new(path);
    if !input.is_file() {
        return Err(anyhow!("Kernel image does not exist: {}", input.display()));
    }
    Ok(input.to_path_buf())
}
