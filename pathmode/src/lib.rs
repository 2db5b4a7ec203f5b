#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pathmode
//!
//! A library for deciding whether the process runs inside a container or on
//! the host, and for translating host-originated file paths into the path
//! namespace of that environment.
//!
//! ## Core Types
//!
//! - [`PathRuntime`]: Detection cached once, conversion on demand
//! - [`ModeDetector`] and [`DetectionResult`]: Tiered container detection
//! - [`PathConverter`] and [`PathSyntax`]: Lexical path conversion
//! - [`Config`] and [`ConfigBuilder`]: Layered configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pathmode::{Config, ExecutionMode, OverrideMode, PathRuntime};
//!
//! let config = Config {
//!     mode: Some(OverrideMode::Docker),
//!     ..Config::with_defaults()
//! };
//! let runtime = PathRuntime::from_config(config);
//!
//! assert_eq!(runtime.mode(), ExecutionMode::Containerized);
//! assert_eq!(
//!     runtime.convert_path("/mnt/c/Users/G/zen-mcp-server/tools/chat.py"),
//!     "/app/project/tools/chat.py"
//! );
//! ```

pub mod config;
pub mod detect;
pub mod error;
pub mod logging;
pub mod path;
mod runtime;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use detect::{
    DetectionMethod, DetectionResult, DetectionSettings, Evidence, ExecutionMode, ModeDetector,
    OverrideMode, PlatformInfo, SystemProbe,
};
pub use error::{Error, Result};
pub use logging::{init_logger, resolve_log_level, LogLevel, Logger};
pub use path::{
    ConversionContext, ConversionRule, ConvertedPath, PathConverter, PathSyntax, ProjectAnchor,
};
pub use runtime::PathRuntime;
