//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `mode`: Show the detected execution mode and its evidence
//! - `convert`: Convert host paths into the active mode's namespace
//! - `classify`: Report the syntax of each path
//! - `platform`: Show operating system and WSL information
//! - `show_config`: Print the effective layered configuration
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod classify;
pub mod completions;
pub mod convert;
pub mod mode;
pub mod platform;
pub mod show_config;
pub mod validate;

pub use classify::ClassifyCommand;
pub use completions::CompletionsCommand;
pub use convert::ConvertCommand;
pub use mode::ModeCommand;
pub use platform::PlatformCommand;
pub use show_config::ShowConfigCommand;
pub use validate::ValidateCommand;
