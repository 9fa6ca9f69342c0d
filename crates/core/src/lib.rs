//! trapscan-core
//!
//! Locates and decodes the UNIX syscall table (`sysent`) and the Mach trap table
//! inside a decrypted 32-bit ARM kernel or kernel cache, without symbols, by
//! matching structural byte patterns. Also lists prelinked kernel extensions.
//!
//! All substantive logic lives here so it is fully testable and reusable from
//! multiple frontends; the CLI only parses arguments and prints.

pub mod error;
pub mod format;
pub mod image;
pub mod kext;
pub mod macho;
pub mod options;
pub mod report;
pub mod scan;
pub mod signatures;
pub mod tables;
pub mod version;

pub use error::{ScanError, ScanResult};
pub use image::{KernelImage, MappedImage};
pub use options::ScanOptions;
pub use scan::{scan_image, KernelReport};

/// Returns the library version as encoded at compile time.
///
/// Useful for tests and for frontends to report consistent version info.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
