use anyhow::{anyhow, Context, Result};
use trapscan_core::format::detect_format;
use trapscan_core::kext::extract_kexts;
use trapscan_core::macho::MachLayout;
use trapscan_core::options::DEFAULT_PRELINK_SEGMENT;
use trapscan_core::report::format_kext;

use crate::commands::{open_image, print_json};

/// List the kernel extensions recorded in the prelink segment.
pub fn kexts_command(path: &str, prelink_segment: Option<&str>, json: bool) -> Result<()> {
    let segment = prelink_segment.unwrap_or(DEFAULT_PRELINK_SEGMENT);
    let mapped = open_image(path)?;
    let image = mapped.image();

    detect_format(&image)
        .with_context(|| format!("Failed to read header of {}", mapped.path().display()))?;
    let layout = MachLayout::parse(image.bytes())
        .with_context(|| format!("Failed to read load commands of {}", mapped.path().display()))?;
    let blob = layout
        .segment_bytes(&image, segment)?
        .ok_or_else(|| anyhow!("No {} segment in {}", segment, mapped.path().display()))?;

    let kexts = extract_kexts(blob);

    if json {
        return print_json(&kexts);
    }

    for kext in &kexts {
        println!("{}", format_kext(kext));
    }
    println!("Got {} kexts. done", kexts.len());

    Ok(())
}
