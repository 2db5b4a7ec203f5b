//! Configuration schema definitions.
//!
//! This module defines the configuration structure for pathmode: the
//! detection override and debug flag, the container mount points, the host
//! workspace root, and the project anchor tokens.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::detect::{DetectionSettings, OverrideMode, DEFAULT_APP_ROOT};
use crate::path::{
    ConversionContext, ProjectAnchor, DEFAULT_CONTAINER_PROJECT_ROOT,
    DEFAULT_CONTAINER_WORKSPACE_ROOT,
};
use crate::ExecutionMode;

/// Complete configuration structure.
///
/// Every field is optional so that sources can be layered; unset fields fall
/// back to built-in defaults when the configuration is turned into detection
/// settings or a conversion context.
///
/// # Examples
///
/// ```
/// use pathmode::config::Config;
/// use pathmode::OverrideMode;
///
/// let config = Config {
///     mode: Some(OverrideMode::Docker),
///     container_project_root: Some("/srv/code".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.effective_container_project_root(), "/srv/code");
/// assert_eq!(config.effective_container_workspace_root(), "/workspace");
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Detection override: `auto`, `docker`, or `local`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<OverrideMode>,

    /// Record detection evidence and log conversion fallbacks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,

    /// Where the project is mounted inside the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_project_root: Option<String>,

    /// Where the external workspace is mounted inside the container.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_workspace_root: Option<String>,

    /// Host directory that is mounted at the container workspace root.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host_workspace_root: Option<String>,

    /// Directory names marking where a project begins in a host path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_anchors: Option<Vec<String>>,

    /// Container application root used by the working-directory heuristic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_root: Option<String>,
}

impl Config {
    /// A configuration with every field set to its built-in default.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self {
            mode: Some(OverrideMode::Auto),
            debug: Some(false),
            container_project_root: Some(DEFAULT_CONTAINER_PROJECT_ROOT.to_string()),
            container_workspace_root: Some(DEFAULT_CONTAINER_WORKSPACE_ROOT.to_string()),
            host_workspace_root: None,
            project_anchors: Some(
                ProjectAnchor::DEFAULT_TOKENS
                    .iter()
                    .map(ToString::to_string)
                    .collect(),
            ),
            app_root: Some(DEFAULT_APP_ROOT.to_string()),
        }
    }

    /// The effective override mode.
    #[must_use]
    pub fn effective_mode(&self) -> OverrideMode {
        self.mode.unwrap_or_default()
    }

    /// Whether debug recording is enabled.
    #[must_use]
    pub fn effective_debug(&self) -> bool {
        self.debug.unwrap_or(false)
    }

    /// The effective container project root.
    #[must_use]
    pub fn effective_container_project_root(&self) -> &str {
        self.container_project_root
            .as_deref()
            .unwrap_or(DEFAULT_CONTAINER_PROJECT_ROOT)
    }

    /// The effective container workspace root.
    #[must_use]
    pub fn effective_container_workspace_root(&self) -> &str {
        self.container_workspace_root
            .as_deref()
            .unwrap_or(DEFAULT_CONTAINER_WORKSPACE_ROOT)
    }

    /// The effective project anchors.
    #[must_use]
    pub fn effective_anchor(&self) -> ProjectAnchor {
        match &self.project_anchors {
            Some(tokens) => ProjectAnchor::new(tokens),
            None => ProjectAnchor::default(),
        }
    }

    /// Settings for the mode detector.
    #[must_use]
    pub fn detection_settings(&self) -> DetectionSettings {
        DetectionSettings {
            override_mode: self.effective_mode(),
            debug: self.effective_debug(),
            app_root: PathBuf::from(self.app_root.as_deref().unwrap_or(DEFAULT_APP_ROOT)),
        }
    }

    /// A conversion context for `mode` built from this configuration.
    #[must_use]
    pub fn conversion_context(&self, mode: ExecutionMode) -> ConversionContext {
        ConversionContext::new(
            mode,
            self.effective_container_project_root(),
            self.effective_container_workspace_root(),
        )
        .with_host_workspace_root(self.host_workspace_root.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_config() {
        let yaml = r"
mode: docker
debug: true
container_project_root: /srv/code
container_workspace_root: /data
host_workspace_root: 'C:\Users\G\external'
project_anchors:
  - repo
  - zen-mcp-server
app_root: /srv
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.mode, Some(OverrideMode::Docker));
        assert_eq!(config.debug, Some(true));
        assert_eq!(config.container_project_root.as_deref(), Some("/srv/code"));
        assert_eq!(config.host_workspace_root.as_deref(), Some(r"C:\Users\G\external"));
        assert_eq!(config.effective_anchor().tokens(), ["repo", "zen-mcp-server"]);

        let settings = config.detection_settings();
        assert_eq!(settings.override_mode, OverrideMode::Docker);
        assert!(settings.debug);
        assert_eq!(settings.app_root, PathBuf::from("/srv"));
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("ports: 5000\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_mode_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("mode: container\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = Config::default();
        assert_eq!(config.effective_mode(), OverrideMode::Auto);
        assert!(!config.effective_debug());
        assert_eq!(config.effective_container_project_root(), "/app/project");
        assert_eq!(config.effective_anchor(), ProjectAnchor::default());
        assert_eq!(config.detection_settings(), DetectionSettings::default());
    }

    #[test]
    fn test_with_defaults_matches_effective_values() {
        let explicit = Config::with_defaults();
        let implicit = Config::default();
        assert_eq!(explicit.detection_settings(), implicit.detection_settings());
        assert_eq!(
            explicit.conversion_context(ExecutionMode::Containerized),
            implicit.conversion_context(ExecutionMode::Containerized)
        );
        assert_eq!(explicit.effective_anchor(), implicit.effective_anchor());
    }

    #[test]
    fn test_conversion_context() {
        let config = Config {
            container_project_root: Some("/srv/code/".to_string()),
            host_workspace_root: Some("/home/u/ext".to_string()),
            ..Default::default()
        };
        let ctx = config.conversion_context(ExecutionMode::Containerized);
        assert_eq!(ctx.container_project_root(), "/srv/code");
        assert_eq!(ctx.container_workspace_root(), "/workspace");
        assert_eq!(ctx.host_workspace_root(), Some("/home/u/ext"));
    }

    #[test]
    fn test_serialize_skips_unset_fields() {
        let config = Config {
            debug: Some(true),
            ..Default::default()
        };
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert_eq!(yaml.trim(), "debug: true");
    }
}
