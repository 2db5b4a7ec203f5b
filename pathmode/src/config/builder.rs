//! Builder that assembles a validated configuration from every source.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a [`Config`] by layering defaults, files, environment variables,
/// and programmatic overrides, then validating the result.
///
/// The built configuration has every field except `host_workspace_root`
/// populated.
///
/// # Examples
///
/// ```
/// use pathmode::config::{Config, ConfigBuilder};
/// use pathmode::OverrideMode;
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         mode: Some(OverrideMode::Docker),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
///
/// assert_eq!(config.mode, Some(OverrideMode::Docker));
/// assert_eq!(config.container_project_root.as_deref(), Some("/app/project"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    skip_files: bool,
    skip_env: bool,
    overrides: Option<Config>,
}

impl ConfigBuilder {
    /// Creates a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory to start project-file discovery from (default: current dir).
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Directory holding the user `config.yaml` (default: `~/.pathmode`).
    #[must_use]
    pub fn with_data_dir(mut self, dir: &Path) -> Self {
        self.data_dir = Some(dir.to_path_buf());
        self
    }

    /// Ignore user and project configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Ignore `MCP_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Highest-precedence overrides applied after every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Loads, merges, and validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed,
    /// an environment variable is malformed, or the result fails validation.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.data_dir.as_deref())?;
            for source in &sources {
                ConfigValidator::validate(&source.config).inspect_err(|_| {
                    log::debug!("Invalid configuration in {}", source.path.display());
                })?;
            }
            ConfigMerger::merge(sources)
        };

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        Self::fill_defaults(&mut config);
        ConfigValidator::validate(&config)?;

        Ok(config)
    }

    /// Populates unset fields; configured anchors replace the default set.
    fn fill_defaults(config: &mut Config) {
        let defaults = Config::with_defaults();
        config.mode = config.mode.or(defaults.mode);
        config.debug = config.debug.or(defaults.debug);
        if config.container_project_root.is_none() {
            config.container_project_root = defaults.container_project_root;
        }
        if config.container_workspace_root.is_none() {
            config.container_workspace_root = defaults.container_workspace_root;
        }
        if config.project_anchors.is_none() {
            config.project_anchors = defaults.project_anchors;
        }
        if config.app_root.is_none() {
            config.app_root = defaults.app_root;
        }
    }
}
