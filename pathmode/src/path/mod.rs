//! Lexical path classification and host-to-container conversion.
//!
//! # Key Concepts
//!
//! ## Syntax
//!
//! Every input string is first classified into a [`PathSyntax`]: Windows
//! absolute, UNC, WSL mount, POSIX absolute, relative, or already canonical
//! (rooted at one of the container's own mount points). Classification looks
//! only at characters and accepts both `\` and `/` as separators.
//!
//! ## Conversion
//!
//! A [`PathConverter`] holds an immutable [`ConversionContext`] and a
//! [`ProjectAnchor`]. In host mode conversion is the identity. In
//! containerized mode the converter re-homes host paths under the container
//! workspace root or project root, always emitting `/`-separated paths.
//! Converting an already converted path returns it unchanged.
//!
//! # Examples
//!
//! ```
//! use pathmode::path::{ConversionContext, ConversionRule, PathConverter, ProjectAnchor};
//! use pathmode::ExecutionMode;
//!
//! let ctx = ConversionContext::new(ExecutionMode::Containerized, "/app/project", "/workspace")
//!     .with_host_workspace_root(Some(r"C:\Users\G\external".to_string()));
//! let converter = PathConverter::new(ctx, ProjectAnchor::default());
//!
//! let converted = converter.convert_detailed(r"C:\Users\G\external\data\a.csv");
//! assert_eq!(converted.path, "/workspace/data/a.csv");
//! assert_eq!(converted.rule, ConversionRule::Workspace);
//!
//! // Idempotent on its own output.
//! assert_eq!(converter.convert(&converted.path), converted.path);
//! ```

mod anchor;
mod context;
mod converter;
pub mod syntax;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use anchor::ProjectAnchor;
pub use context::{ConversionContext, DEFAULT_CONTAINER_PROJECT_ROOT, DEFAULT_CONTAINER_WORKSPACE_ROOT};
pub use converter::{ConversionRule, ConvertedPath, PathConverter};
pub use syntax::{classify, PathSyntax};
