//! Build script for pathmode-cli.
//!
//! Generates the `pathmode.1` man page into OUT_DIR with clap_mangen.
//! Build scripts cannot depend on the crate being built, so the command
//! tree is declared here by hand.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("pathmode")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Detect container mode and convert host paths")
        .long_about(
            "Detect whether the process runs in a container or on the host, and translate \
             host paths into the container's namespace",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory holding the user configuration")
                .value_name("PATH")
                .global(true)
                .env("PATHMODE_DATA_DIR"),
        )
        .arg(
            Arg::new("mode")
                .long("mode")
                .help("Force the execution mode instead of detecting it")
                .value_name("MODE")
                .value_parser(["auto", "docker", "local"])
                .global(true),
        )
        .arg(
            Arg::new("debug")
                .long("debug")
                .help("Record detection evidence and log conversion fallbacks")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("mode")
                .about("Show the detected execution mode")
                .long_about("Report whether the process runs on the host or in a container"),
            Command::new("convert")
                .about("Convert paths into the active mode's namespace")
                .long_about("Rewrite Windows, UNC, WSL, and POSIX host paths to container paths"),
            Command::new("classify")
                .about("Classify paths by syntax")
                .long_about("Report whether each path is Windows, UNC, WSL, POSIX, or relative"),
            Command::new("platform")
                .about("Show platform information")
                .long_about("Display the operating system and whether it runs under WSL"),
            Command::new("show-config")
                .about("Show the effective configuration")
                .long_about("Print the configuration after files and environment are merged"),
            Command::new("validate")
                .about("Validate a configuration file")
                .long_about("Check a pathmode configuration file for errors"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pathmode.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
