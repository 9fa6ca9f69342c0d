#[path = "../../core/tests/common/mod.rs"]
mod common;

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

fn prelinked_kernel() -> Vec<u8> {
    common::macho_kernel(&common::kext_blob(&[
        ("AppleARMPlatform", Some("com.apple.driver.AppleARMPlatform")),
        ("Sandbox", Some("com.apple.security.sandbox")),
    ]))
}

fn write_image(dir: &TempDir, name: &str, bytes: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, bytes).expect("write image");
    path
}

fn json_stdout(args: &[&str], path: &Path) -> serde_json::Value {
    let output = cargo_bin_cmd!("trapscan")
        .args(args)
        .arg(path)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    serde_json::from_slice(&output).expect("json output")
}

#[test]
fn scan_prints_tables_and_kexts() {
    let temp = tempdir().expect("tempdir");
    let path = write_image(&temp, "kernelcache", &prelinked_kernel());

    cargo_bin_cmd!("trapscan")
        .arg("scan")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("This is an ARM binary. Applying iOS kernel signatures"))
        .stdout(predicate::str::contains("This appears to be XNU 2107.1.78"))
        .stdout(predicate::str::contains(
            "sysent offset in file/memory (for patching purposes): 0x1000/0x80002000",
        ))
        .stdout(predicate::str::contains("Suppressing enosys (0x80030a15)"))
        .stdout(predicate::str::contains("Kext: Sandbox (com.apple.security.sandbox)"))
        .stdout(predicate::str::contains("Got 2 kexts. done"))
        .stdout(predicate::str::contains("\n8. ").not());
}

#[test]
fn scan_prints_each_diagnostic_once() {
    let temp = tempdir().expect("tempdir");
    let path = write_image(&temp, "kernelcache", &prelinked_kernel());

    let output = cargo_bin_cmd!("trapscan")
        .arg("scan")
        .arg(&path)
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("XNU").not())
        .stderr(predicate::str::contains("for patching purposes").not())
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).expect("utf-8 stdout");
    assert_eq!(stdout.matches("This appears to be XNU 2107.1.78").count(), 1);
    assert_eq!(stdout.matches("sysent offset in file/memory").count(), 1);
}

#[test]
fn verbose_scan_logs_progress_on_stderr() {
    let temp = tempdir().expect("tempdir");
    let path = write_image(&temp, "kernelcache", &prelinked_kernel());

    cargo_bin_cmd!("trapscan")
        .arg("--verbose")
        .arg("scan")
        .arg(&path)
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("This appears to be XNU 2107.1.78"))
        .stderr(predicate::str::contains("sysent offset in file/memory"));
}

#[test]
fn scan_json_carries_report_and_provenance() {
    let temp = tempdir().expect("tempdir");
    let bytes = prelinked_kernel();
    let path = write_image(&temp, "kernelcache", &bytes);

    let body = json_stdout(&["scan"], &path);
    assert_eq!(body["size"], bytes.len());
    assert_eq!(body["sha256"], trapscan::sha256_bytes(&bytes));
    assert!(body["scanned_at"].as_str().is_some_and(|s| !s.is_empty()));
    assert_eq!(body["options"]["prelink_segment"], "__PRELINK_INFO");

    let report = &body["report"];
    assert_eq!(report["version"], "2107.1.78");
    assert_eq!(report["entry_point"], 0x8000_2041u64);
    assert_eq!(report["sysent"]["status"], "decoded");
    assert_eq!(report["sysent"]["location"]["offset"], 0x1000);
    assert_eq!(report["sysent"]["location"]["kind"], "unix_syscalls");
    assert_eq!(report["sysent"]["entries"].as_array().map(Vec::len), Some(443));
    assert_eq!(report["mach_traps"]["entries"][31]["name"], "mach_msg_trap");
    assert_eq!(report["kexts"][1]["identifier"], "com.apple.security.sandbox");
}

#[test]
fn scan_flags_skip_stages_and_show_all() {
    let temp = tempdir().expect("tempdir");
    let path = write_image(&temp, "kernelcache", &prelinked_kernel());

    cargo_bin_cmd!("trapscan")
        .arg("scan")
        .arg(&path)
        .args(["--no-unix", "--no-kexts", "--show-all"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sysent offset").not())
        .stdout(predicate::str::contains("Got ").not())
        .stdout(predicate::str::contains("  0 kern_invalid"));
}

#[test]
fn scan_reads_yaml_config() {
    let temp = tempdir().expect("tempdir");
    let path = write_image(&temp, "kernelcache", &prelinked_kernel());
    let config = temp.path().join("scan.yaml");
    fs::write(&config, "mach_traps: false\nkexts: false\n").expect("write config");

    let body = json_stdout(&["scan", "--config", config.to_str().expect("utf-8 path")], &path);
    assert_eq!(body["options"]["mach_traps"], false);
    assert_eq!(body["report"]["mach_traps"]["status"], "skipped");
    assert_eq!(body["report"]["sysent"]["status"], "decoded");
    assert!(body["report"]["kexts"].is_null());
}

#[test]
fn scan_with_missing_table_prints_partial_report_and_fails() {
    let temp = tempdir().expect("tempdir");
    let mut bytes = common::bare_kernel();
    common::put_u32(&mut bytes, common::SYSENT_AT + 24 + 16, 0);
    let path = write_image(&temp, "kernel", &bytes);

    cargo_bin_cmd!("trapscan")
        .arg("scan")
        .arg(&path)
        .assert()
        .failure()
        .stdout(predicate::str::contains("sysent: Unable to locate sysent"))
        .stdout(predicate::str::contains("Kern invalid should be 0x80060c41. Ignoring those"))
        .stderr(predicate::str::contains("Incomplete scan: sysent: Unable to locate sysent"));
}

#[test]
fn scan_rejects_fat_binaries() {
    let temp = tempdir().expect("tempdir");
    let mut bytes = common::bare_kernel();
    common::put_u32(&mut bytes, 0, 0xBEBA_FECA);
    let path = write_image(&temp, "fat", &bytes);

    cargo_bin_cmd!("trapscan")
        .arg("scan")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported format: fat binary"))
        .stderr(predicate::str::contains("Cannot read segment layout").not());
}

#[test]
fn scan_reports_missing_image() {
    let temp = tempdir().expect("tempdir");
    let path = temp.path().join("absent");

    cargo_bin_cmd!("trapscan")
        .arg("scan")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Kernel image does not exist"));
}

#[test]
fn info_shows_header_facts() {
    let temp = tempdir().expect("tempdir");
    let path = write_image(&temp, "kernelcache", &prelinked_kernel());

    cargo_bin_cmd!("trapscan")
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("CPU type: 12 (ARM)"))
        .stdout(predicate::str::contains("XNU version: 2107.1.78"))
        .stdout(predicate::str::contains("Entry point: 0x80002041"));

    let body = json_stdout(&["info"], &path);
    assert_eq!(body["architecture"]["verified"], true);
    assert_eq!(body["version"], "2107.1.78");
}

#[test]
fn info_on_bare_kernel_has_unknown_entry_point() {
    let temp = tempdir().expect("tempdir");
    let path = write_image(&temp, "kernel", &common::bare_kernel());

    cargo_bin_cmd!("trapscan")
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry point: (unknown)"));
}

#[test]
fn kexts_lists_prelinked_extensions() {
    let temp = tempdir().expect("tempdir");
    let path = write_image(&temp, "kernelcache", &prelinked_kernel());

    cargo_bin_cmd!("trapscan")
        .arg("kexts")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Kext: AppleARMPlatform (com.apple.driver.AppleARMPlatform)",
        ))
        .stdout(predicate::str::contains("Got 2 kexts. done"));

    let body = json_stdout(&["kexts"], &path);
    assert_eq!(body.as_array().map(Vec::len), Some(2));
    assert_eq!(body[0]["name"], "AppleARMPlatform");
}

#[test]
fn kexts_requires_the_prelink_segment() {
    let temp = tempdir().expect("tempdir");
    let path = write_image(&temp, "kernelcache", &prelinked_kernel());

    cargo_bin_cmd!("trapscan")
        .arg("kexts")
        .arg(&path)
        .args(["--prelink-segment", "__PRELINK_TEXT"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No __PRELINK_TEXT segment"));
}
