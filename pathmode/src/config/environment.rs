//! Environment variable handling for configuration overrides.
//!
//! This module provides support for the `MCP_*` environment variables that
//! override configuration file values.

use crate::config::schema::Config;
use crate::detect::OverrideMode;
use crate::error::{Error, Result};
use std::env;

/// Detection override: `auto`, `docker`, or `local`.
pub const ENV_FILE_PATH_MODE: &str = "MCP_FILE_PATH_MODE";
/// Enables detection evidence and fallback logging.
pub const ENV_DEBUG_PATH_DETECTION: &str = "MCP_DEBUG_PATH_DETECTION";
/// Container project root.
pub const ENV_CONTAINER_PROJECT_ROOT: &str = "MCP_CONTAINER_PROJECT_ROOT";
/// Container workspace root.
pub const ENV_CONTAINER_WORKSPACE_ROOT: &str = "MCP_CONTAINER_WORKSPACE_ROOT";
/// Host directory mounted at the container workspace root.
pub const ENV_HOST_WORKSPACE_ROOT: &str = "MCP_HOST_WORKSPACE_ROOT";
/// Comma-separated project anchor tokens.
pub const ENV_PROJECT_ANCHORS: &str = "MCP_PROJECT_ANCHORS";
/// Container application root for the working-directory heuristic.
pub const ENV_APP_ROOT: &str = "MCP_APP_ROOT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pathmode::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// A blank `MCP_FILE_PATH_MODE` counts as unset. An unrecognized one is
    /// not an error: it is logged and the lower layers' mode is kept.
    ///
    /// # Errors
    ///
    /// Returns an error if `MCP_DEBUG_PATH_DETECTION` is not a boolean.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        Self::apply_from(config, |key| env::var(key).ok())
    }

    /// Apply overrides read through `lookup` instead of the process environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the debug flag is not a boolean.
    pub fn apply_from<F>(config: &mut Config, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(mode) = lookup(ENV_FILE_PATH_MODE).filter(|v| !v.trim().is_empty()) {
            match mode.parse::<OverrideMode>() {
                Ok(parsed) => config.mode = Some(parsed),
                Err(_) => log::warn!(
                    "Ignoring unrecognized {ENV_FILE_PATH_MODE} value '{}'",
                    mode.trim()
                ),
            }
        }

        if let Some(val) = lookup(ENV_DEBUG_PATH_DETECTION) {
            config.debug = Some(Self::parse_bool(ENV_DEBUG_PATH_DETECTION, &val)?);
        }

        if let Some(root) = lookup(ENV_CONTAINER_PROJECT_ROOT) {
            config.container_project_root = Some(root);
        }

        if let Some(root) = lookup(ENV_CONTAINER_WORKSPACE_ROOT) {
            config.container_workspace_root = Some(root);
        }

        if let Some(root) = lookup(ENV_HOST_WORKSPACE_ROOT) {
            config.host_workspace_root = Some(root);
        }

        // Anchors accumulate with those from files
        if let Some(anchors) = lookup(ENV_PROJECT_ANCHORS) {
            let parsed = Self::parse_anchors(&anchors);
            match &mut config.project_anchors {
                Some(existing) => {
                    for token in parsed {
                        if !existing.contains(&token) {
                            existing.push(token);
                        }
                    }
                }
                None => config.project_anchors = Some(parsed),
            }
        }

        if let Some(root) = lookup(ENV_APP_ROOT) {
            config.app_root = Some(root);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    pub(crate) fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    /// Parse anchors from a comma-separated string.
    fn parse_anchors(s: &str) -> Vec<String> {
        s.split(',')
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .map(str::to_string)
            .collect()
    }
}
