//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    ClassifyCommand, CompletionsCommand, ConvertCommand, ModeCommand, PlatformCommand,
    ShowConfigCommand, ValidateCommand,
};
use clap::{Parser, Subcommand};
use pathmode::OverrideMode;
use std::path::PathBuf;

/// Command-line tool for inspecting execution mode and path conversion.
#[derive(Parser)]
#[command(name = "pathmode")]
#[command(version, about = "Detect container mode and convert host paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory holding the user configuration
    #[arg(long, value_name = "PATH", global = true, env = "PATHMODE_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Force the execution mode instead of detecting it
    #[arg(long, value_enum, value_name = "MODE", global = true)]
    pub mode: Option<OverrideMode>,

    /// Record detection evidence and log conversion fallbacks
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show the detected execution mode
    Mode(ModeCommand),

    /// Convert paths into the active mode's namespace
    Convert(ConvertCommand),

    /// Classify paths by syntax
    Classify(ClassifyCommand),

    /// Show platform information
    Platform(PlatformCommand),

    /// Show the effective configuration
    #[command(name = "show-config")]
    ShowConfig(ShowConfigCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
