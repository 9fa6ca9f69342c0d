//! Synthetic kernel images shared by the integration tests.
#![allow(dead_code)]

use trapscan_core::tables::{KERN_INVALID, MACH_TRAP_COUNT, MACH_TRAP_NAMES, SYSCALL_COUNT};

pub const VERSION_AT: usize = 0x100;
pub const MACH_AT: usize = 0x400;
pub const SYSENT_AT: usize = 0x1000;
pub const TEXT_SIZE: usize = 0x4000;

pub const TEXT_VMADDR: u32 = 0x8000_1000;
pub const PRELINK_VMADDR: u32 = 0x8100_0000;
pub const ENTRY_POINT: u32 = 0x8000_2041;

pub const ENOSYS: u32 = 0x8003_0A15;
pub const KERN_INVALID_ADDR: u32 = 0x8006_0C41;
pub const ENOSYS_SLOTS: [usize; 5] = [8, 11, 17, 38, 40];

pub const XNU_PATH: &[u8] =
    b"@(#)VERSION: Darwin Kernel Version 13.0.0; root:xnu-2107.1.78~1/RELEASE_ARM_S5L8950X\0\
      /SourceCache/xnu/xnu-2107.1.78/osfmk/arm/model_dep.c\0";

pub fn put_u32(buf: &mut [u8], offset: usize, value: u32) {
    buf[offset..offset + 4].copy_from_slice(&value.to_le_bytes());
}

/// Just the two header words the format check reads.
pub fn put_arm_header(buf: &mut [u8]) {
    put_u32(buf, 0, 0xFEED_FACE);
    put_u32(buf, 4, 12);
}

pub fn sysent_addresses() -> Vec<u32> {
    (0..SYSCALL_COUNT)
        .map(|idx| {
            if ENOSYS_SLOTS.contains(&idx) {
                ENOSYS
            } else if idx % 10 == 3 {
                // ARM-mode handler, word aligned.
                0x8005_0000 + idx as u32 * 0x10
            } else {
                0x8004_0001 + idx as u32 * 0x20
            }
        })
        .collect()
}

pub fn mach_addresses() -> Vec<u32> {
    (0..MACH_TRAP_COUNT)
        .map(|idx| {
            if MACH_TRAP_NAMES[idx] == KERN_INVALID {
                KERN_INVALID_ADDR
            } else {
                0x8007_0001 + idx as u32 * 0x30
            }
        })
        .collect()
}

/// Lay out 24-byte `sysent` records at `base`, handler at +20.
///
/// Records 1 and 2 carry the shapes the locator looks for; every other record
/// gets a small nonzero argument count so it cannot be mistaken for them.
pub fn write_sysent(buf: &mut [u8], base: usize, addresses: &[u32]) {
    for (idx, &address) in addresses.iter().enumerate() {
        let rec = base + idx * 24;
        buf[rec..rec + 24].fill(0);
        match idx {
            1 => put_u32(buf, rec + 16, 1),
            2 => put_u32(buf, rec + 12, 4),
            _ => put_u32(buf, rec, 2 + (idx as u32 % 5)),
        }
        put_u32(buf, rec + 20, address);
    }
}

/// Lay out 8-byte `mach_trap_table` records at `base`: zero argument count, handler.
pub fn write_mach_traps(buf: &mut [u8], base: usize, addresses: &[u32]) {
    for (idx, &address) in addresses.iter().enumerate() {
        let rec = base + idx * 8;
        put_u32(buf, rec, 0);
        put_u32(buf, rec + 4, address);
    }
}

/// Header, version string, and both tables; no load commands.
pub fn bare_kernel() -> Vec<u8> {
    let mut buf = vec![0u8; TEXT_SIZE];
    put_arm_header(&mut buf);
    write_tables(&mut buf);
    buf
}

fn write_tables(buf: &mut [u8]) {
    buf[VERSION_AT..VERSION_AT + XNU_PATH.len()].copy_from_slice(XNU_PATH);
    write_mach_traps(buf, MACH_AT, &mach_addresses());
    write_sysent(buf, SYSENT_AT, &sysent_addresses());
}

/// Property-list fragment in the compact layout found in kernel caches.
pub fn kext_blob(kexts: &[(&str, Option<&str>)]) -> Vec<u8> {
    let mut xml = String::from("<dict><key>_PrelinkInfoDictionary</key><array>");
    for (name, identifier) in kexts {
        xml.push_str("<dict><key>CFBundleName</key><string>");
        xml.push_str(name);
        xml.push_str("</string>");
        if let Some(identifier) = identifier {
            xml.push_str("<key>CFBundleIdentifier</key><string>");
            xml.push_str(identifier);
            xml.push_str("</string>");
        }
        xml.push_str("<key>CFBundleVersion</key><string>1.0</string></dict>");
    }
    xml.push_str("</array></dict>");
    let mut bytes = xml.into_bytes();
    bytes.push(0);
    bytes
}

/// A minimal but well-formed 32-bit ARM Mach-O: `__TEXT` covering the tables,
/// `__PRELINK_INFO` holding `blob`, and an ARM `LC_UNIXTHREAD` for the entry point.
pub fn macho_kernel(blob: &[u8]) -> Vec<u8> {
    const LC_SEGMENT: u32 = 0x1;
    const LC_UNIXTHREAD: u32 = 0x5;
    const SEGMENT_CMD_SIZE: u32 = 56;
    const THREAD_CMD_SIZE: u32 = 16 + 17 * 4;

    let mut buf = vec![0u8; TEXT_SIZE + blob.len()];

    put_arm_header(&mut buf);
    put_u32(&mut buf, 8, 9); // CPU_SUBTYPE_ARM_V7
    put_u32(&mut buf, 12, 2); // MH_EXECUTE
    put_u32(&mut buf, 16, 3);
    put_u32(&mut buf, 20, 2 * SEGMENT_CMD_SIZE + THREAD_CMD_SIZE);
    put_u32(&mut buf, 24, 1); // MH_NOUNDEFS

    let mut at = 28;
    let segments = [
        (&b"__TEXT"[..], TEXT_VMADDR, 0u32, TEXT_SIZE as u32),
        (&b"__PRELINK_INFO"[..], PRELINK_VMADDR, TEXT_SIZE as u32, blob.len() as u32),
    ];
    for (name, vmaddr, fileoff, filesize) in segments {
        put_u32(&mut buf, at, LC_SEGMENT);
        put_u32(&mut buf, at + 4, SEGMENT_CMD_SIZE);
        buf[at + 8..at + 8 + name.len()].copy_from_slice(name);
        put_u32(&mut buf, at + 24, vmaddr);
        put_u32(&mut buf, at + 28, filesize);
        put_u32(&mut buf, at + 32, fileoff);
        put_u32(&mut buf, at + 36, filesize);
        put_u32(&mut buf, at + 40, 5);
        put_u32(&mut buf, at + 44, 5);
        at += SEGMENT_CMD_SIZE as usize;
    }

    put_u32(&mut buf, at, LC_UNIXTHREAD);
    put_u32(&mut buf, at + 4, THREAD_CMD_SIZE);
    put_u32(&mut buf, at + 8, 1); // ARM_THREAD_STATE
    put_u32(&mut buf, at + 12, 17);
    put_u32(&mut buf, at + 16 + 15 * 4, ENTRY_POINT);
    put_u32(&mut buf, at + 16 + 16 * 4, 0x30);

    write_tables(&mut buf);
    buf[TEXT_SIZE..].copy_from_slice(blob);
    buf
}
