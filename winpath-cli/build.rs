//! Build script for winpath-cli.
//!
//! Renders `winpath.1` into `OUT_DIR/man` with clap_mangen. The command tree
//! is declared by hand because a build script cannot link the crate it builds.

use clap::{Arg, ArgAction, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// The command tree documented in the man page.
///
/// Mirrors src/cli.rs and src/commands/; change them together.
fn build_cli() -> Command {
    Command::new("winpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert paths between Windows path dialects")
        .long_about(
            "Normalize and convert paths between DOS, long-path UNC, network share, \
             WSL, Cygwin and MSYS/Git Bash forms",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Configuration file (default: ~/.winpath/config.yaml)")
                .value_name("FILE")
                .global(true)
                .env("WINPATH_CONFIG"),
        )
        .subcommands(vec![
            Command::new("convert")
                .about("Convert paths to another dialect")
                .long_about("Normalize each path and render it in the target dialect")
                .arg(
                    Arg::new("to")
                        .long("to")
                        .help("Target dialect")
                        .value_parser([
                            "dos",
                            "unix",
                            "wsl",
                            "cygwin",
                            "unc",
                            "network-share",
                            "win32",
                        ])
                        .default_value("dos"),
                )
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("Output format")
                        .value_parser(["plain", "json"])
                        .default_value("plain"),
                )
                .arg(
                    Arg::new("stats")
                        .long("stats")
                        .help("Print cache statistics to stderr")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("paths")
                        .value_name("PATH")
                        .required(true)
                        .num_args(1..),
                ),
            Command::new("classify")
                .about("Report the dialect of each path")
                .long_about("Print the dialect each path is written in")
                .arg(
                    Arg::new("format")
                        .long("format")
                        .help("Output format")
                        .value_parser(["plain", "json"])
                        .default_value("plain"),
                )
                .arg(
                    Arg::new("paths")
                        .value_name("PATH")
                        .required(true)
                        .num_args(1..),
                ),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("winpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
