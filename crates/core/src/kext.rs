//! Kernel extension names pulled from the prelink property-list blob.
//!
//! This is substring scanning, not a plist parser. It expects one
//! `CFBundleName` per kext, at most one `CFBundleIdentifier` before the next
//! name, and values that start a fixed distance after their key marker.

use serde::Serialize;

use crate::image::find_bytes;

const NAME_KEY: &[u8] = b"CFBundleName</key>";
const IDENTIFIER_KEY: &[u8] = b"CFBundleIdentifier";
const KEY_CLOSE: &[u8] = b"</key>";
const STRING_OPEN: &[u8] = b"<string>";
const STRING_CLOSE: &[u8] = b"</string>";

/// Start of the bundle name relative to its key marker: `CFBundleName</key><string>`.
/// Brittle: any whitespace between the two tags shifts the value.
pub const NAME_VALUE_OFFSET: usize = NAME_KEY.len() + STRING_OPEN.len();

/// Start of the identifier relative to its marker: `CFBundleIdentifier</key><string>`.
/// Brittle in the same way as `NAME_VALUE_OFFSET`.
pub const IDENTIFIER_VALUE_OFFSET: usize =
    IDENTIFIER_KEY.len() + KEY_CLOSE.len() + STRING_OPEN.len();

const _: () = assert!(NAME_VALUE_OFFSET == 26);
const _: () = assert!(IDENTIFIER_VALUE_OFFSET == 32);

/// Longest value copied out of the blob; longer values are truncated.
pub const MAX_VALUE_LEN: usize = 256;

/// A kernel extension found in the blob.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KextDescriptor {
    pub name: String,
    /// Best effort; absent when no identifier precedes the next name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<String>,
}

/// Extract every kext name (and identifier where present) from `blob`, in order.
///
/// The blob is treated as a C string and ends at its first NUL byte.
pub fn extract_kexts(blob: &[u8]) -> Vec<KextDescriptor> {
    let blob = match blob.iter().position(|&b| b == 0) {
        Some(nul) => &blob[..nul],
        None => blob,
    };

    let mut kexts = Vec::new();
    let mut next_name = find_bytes(blob, NAME_KEY, 0);

    while let Some(name_at) = next_name {
        let (name, mut cursor) = value_after(blob, name_at, NAME_VALUE_OFFSET);
        let mut kext = KextDescriptor { name, identifier: None };

        let following_name = find_bytes(blob, NAME_KEY, cursor).unwrap_or(blob.len());
        if let Some(id_at) = find_bytes(blob, IDENTIFIER_KEY, cursor) {
            if id_at < following_name {
                let (identifier, after) = value_after(blob, id_at, IDENTIFIER_VALUE_OFFSET);
                kext.identifier = Some(identifier);
                cursor = after;
            }
        }

        kexts.push(kext);
        next_name = find_bytes(blob, NAME_KEY, cursor);
    }

    kexts
}

/// Copy the value that starts `value_offset` bytes after the marker at `marker_at`
/// and ends at the next `</string>`. Returns the value and the position after the
/// closing tag (or the blob end when the tag is missing).
fn value_after(blob: &[u8], marker_at: usize, value_offset: usize) -> (String, usize) {
    let close = find_bytes(blob, STRING_CLOSE, marker_at);
    let end = close.unwrap_or(blob.len());
    let start = (marker_at + value_offset).min(end);
    let end = end.min(start + MAX_VALUE_LEN);

    let value = String::from_utf8_lossy(&blob[start..end]).into_owned();
    let resume = close.map_or(blob.len(), |c| c + STRING_CLOSE.len());
    (value, resume)
}
