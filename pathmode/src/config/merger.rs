//! Configuration merging and precedence handling.
//!
//! This module implements hierarchical merging of configuration sources,
//! with special handling for the accumulated `project_anchors` field.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pathmode::config::{Config, ConfigMerger};
///
/// let low = Config { app_root: Some("/app".to_string()), ..Default::default() };
/// let high = Config { app_root: Some("/srv".to_string()), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.app_root, Some("/srv".to_string()));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Project anchors: accumulated in order, without duplicates
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.mode.is_some() {
            target.mode = source.mode;
        }

        if source.debug.is_some() {
            target.debug = source.debug;
        }

        if source.container_project_root.is_some() {
            target
                .container_project_root
                .clone_from(&source.container_project_root);
        }

        if source.container_workspace_root.is_some() {
            target
                .container_workspace_root
                .clone_from(&source.container_workspace_root);
        }

        if source.host_workspace_root.is_some() {
            target
                .host_workspace_root
                .clone_from(&source.host_workspace_root);
        }

        if source.app_root.is_some() {
            target.app_root.clone_from(&source.app_root);
        }

        if let Some(ref source_anchors) = source.project_anchors {
            match &mut target.project_anchors {
                Some(target_anchors) => {
                    for token in source_anchors {
                        if !target_anchors.contains(token) {
                            target_anchors.push(token.clone());
                        }
                    }
                }
                None => {
                    target.project_anchors.clone_from(&source.project_anchors);
                }
            }
        }
    }
}
