//! Configuration validation.
//!
//! This module validates the values that end up in a conversion context or
//! detection settings, so that detection and conversion themselves never
//! have to fail.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::path::syntax::trim_root;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use pathmode::config::{Config, ConfigValidator};
///
/// let config = Config::with_defaults();
/// ConfigValidator::validate(&config).unwrap();
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// Unset fields are not checked; their defaults are valid.
    ///
    /// # Errors
    ///
    /// Returns the first validation error found.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref root) = config.container_project_root {
            Self::validate_container_root("container_project_root", root)?;
        }

        if let Some(ref root) = config.container_workspace_root {
            Self::validate_container_root("container_workspace_root", root)?;
        }

        let project = trim_root(config.effective_container_project_root());
        let workspace = trim_root(config.effective_container_workspace_root());
        if project == workspace {
            return Err(Error::Validation {
                field: "container_workspace_root".into(),
                message: format!("Must differ from container_project_root ({project})"),
            });
        }

        if let Some(ref root) = config.host_workspace_root {
            if root.trim().is_empty() {
                return Err(Error::Validation {
                    field: "host_workspace_root".into(),
                    message: "Cannot be empty or only whitespace".into(),
                });
            }
        }

        if let Some(ref anchors) = config.project_anchors {
            for anchor in anchors {
                Self::validate_anchor(anchor)?;
            }
        }

        if let Some(ref app_root) = config.app_root {
            if !app_root.starts_with('/') {
                return Err(Error::Validation {
                    field: "app_root".into(),
                    message: format!("Must be an absolute path, got '{app_root}'"),
                });
            }
        }

        Ok(())
    }

    /// Container roots are absolute POSIX paths other than `/`.
    fn validate_container_root(field: &str, value: &str) -> Result<()> {
        if !value.starts_with('/') {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Must be an absolute POSIX path, got '{value}'"),
            });
        }

        if value.contains('\\') {
            return Err(Error::Validation {
                field: field.into(),
                message: "Must use '/' separators".into(),
            });
        }

        if trim_root(value) == "/" {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be the filesystem root".into(),
            });
        }

        Ok(())
    }

    /// Anchors are single, non-empty path segments.
    fn validate_anchor(value: &str) -> Result<()> {
        if value.trim().is_empty() {
            return Err(Error::Validation {
                field: "project_anchors".into(),
                message: "Anchors cannot be empty or only whitespace".into(),
            });
        }

        if value.contains(['/', '\\']) {
            return Err(Error::Validation {
                field: "project_anchors".into(),
                message: format!("Anchor '{value}' must be a single path segment"),
            });
        }

        Ok(())
    }
}
