use log::debug;
use serde::Serialize;

use crate::error::{ScanError, ScanResult};
use crate::image::{find_bytes, KernelImage};

/// Prefix of the XNU source path baked into kernel panic strings.
pub const XNU_SIGNATURE: &[u8] = b"SourceCache/xnu/xnu-";

/// Maximum number of bytes copied after the signature.
pub const VERSION_MAX_LEN: usize = 40;

/// XNU version taken from the build path, e.g. `2107.1.78`. Informational only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct VersionSignature(pub String);

impl VersionSignature {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for VersionSignature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Find the first `SourceCache/xnu/xnu-` string and return the version component.
///
/// Up to 40 bytes following the signature are copied, stopping at a NUL or the
/// image end, then cut at the first `/` so the rest of the source path is dropped.
pub fn find_version_signature(image: &KernelImage<'_>) -> ScanResult<VersionSignature> {
    image.window(0, XNU_SIGNATURE.len())?;
    let bytes = image.bytes();
    let at = find_bytes(bytes, XNU_SIGNATURE, 0).ok_or(ScanError::SignatureNotFound)?;
    let start = at + XNU_SIGNATURE.len();
    let end = (start + VERSION_MAX_LEN).min(bytes.len());

    let copied = &bytes[start..end];
    let copied = copied.split(|&b| b == 0).next().unwrap_or_default();
    let version = copied.split(|&b| b == b'/').next().unwrap_or_default();

    debug!("XNU signature at offset {at:#x}");
    Ok(VersionSignature(String::from_utf8_lossy(version).into_owned()))
}
