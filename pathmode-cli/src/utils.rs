//! Utility functions for CLI operations.
//!
//! This module provides helpers shared across CLI commands: configuration
//! loading, runtime construction, and output formatting.

use crate::error::CliError;
use clap::ValueEnum;
use pathmode::{Config, ConfigBuilder, OverrideMode, PathRuntime};
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
///
/// Verbosity is consumed by the logger before any command runs.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Force the execution mode.
    pub mode: Option<OverrideMode>,

    /// Enable detection evidence and conversion debug logging.
    pub debug: bool,
}

/// Output format for commands that report structured data.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable text.
    #[default]
    Text,
    /// Pretty-printed JSON.
    Json,
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. Configuration files
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref data_dir) = global.data_dir {
        builder = builder.with_data_dir(data_dir);
    }

    let overrides = Config {
        mode: global.mode,
        debug: global.debug.then_some(true),
        ..Config::default()
    };

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Build a runtime from the layered configuration.
pub fn build_runtime(global: &GlobalOptions) -> Result<PathRuntime, CliError> {
    let config = load_configuration(global)?;
    log::debug!("Effective path mode setting: {}", config.effective_mode());
    Ok(PathRuntime::from_config(config))
}

/// Write `value` to stdout as pretty-printed JSON followed by a newline.
pub fn write_json<T: Serialize + ?Sized>(value: &T) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, value)?;
    writeln!(handle)?;
    Ok(())
}
