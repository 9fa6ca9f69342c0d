use anyhow::Result;
use clap::{Parser, Subcommand};
use trapscan::commands::{info_command, kexts_command, scan_command, ScanFlags};

/// Syscall and Mach trap table locator for 32-bit ARM kernel images.
///
/// This CLI is a thin wrapper around `trapscan-core` (exposed in code as `trapscan_core`).
/// All substantive logic lives in the library so it can be tested thoroughly
/// and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "trapscan",
    version,
    about = "Locate and dump sysent and mach_trap_table in a decrypted ARM kernel",
    long_about = None
)]
struct Cli {
    /// Show debug diagnostics on stderr (RUST_LOG overrides).
    #[arg(long, short, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Locate both dispatch tables, dump their entries, and list prelinked kexts.
    ///
    /// Tables are found by byte signatures, not symbols. If either table cannot be
    /// located the other is still printed and the command exits non-zero.
    Scan {
        /// Path to a decrypted kernel or kernel cache.
        path: String,

        /// Optional JSON or YAML file with scan options.
        #[arg(long)]
        config: Option<String>,

        /// Skip the UNIX syscall table.
        #[arg(long, default_value_t = false)]
        no_unix: bool,

        /// Skip the Mach trap table.
        #[arg(long, default_value_t = false)]
        no_mach: bool,

        /// Skip kext listing.
        #[arg(long, default_value_t = false)]
        no_kexts: bool,

        /// Also print entries that resolve to enosys / kern_invalid.
        #[arg(long, default_value_t = false)]
        show_all: bool,

        /// Segment holding the prelinked kext property list.
        #[arg(long)]
        prelink_segment: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Show the header check, XNU version and entry point without scanning tables.
    Info {
        /// Path to a decrypted kernel or kernel cache.
        path: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// List kernel extensions from the prelink segment only.
    Kexts {
        /// Path to a decrypted kernel cache.
        path: String,

        /// Segment holding the prelinked kext property list.
        #[arg(long)]
        prelink_segment: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

impl Command {
    fn json(&self) -> bool {
        match self {
            Command::Scan { json, .. }
            | Command::Info { json, .. }
            | Command::Kexts { json, .. } => *json,
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { log::LevelFilter::Debug } else { log::LevelFilter::Info };
    env_logger::Builder::new()
        .filter_module("trapscan_core", level)
        .filter_module("trapscan", level)
        .parse_default_env()
        .target(env_logger::Target::Stderr)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Keep stderr quiet in JSON mode so output stays machine-readable.
    if !cli.command.json() {
        init_logging(cli.verbose);
    }

    match cli.command {
        Command::Scan {
            path,
            config,
            no_unix,
            no_mach,
            no_kexts,
            show_all,
            prelink_segment,
            json,
        } => {
            let flags = ScanFlags { no_unix, no_mach, no_kexts, show_all, prelink_segment };
            scan_command(&path, config.as_deref(), &flags, json)?
        }
        Command::Info { path, json } => info_command(&path, json)?,
        Command::Kexts { path, prelink_segment, json } => {
            kexts_command(&path, prelink_segment.as_deref(), json)?
        }
    }

    Ok(())
}
