//! Common test utilities for integration tests.
//!
//! This module provides helper functions and fixture builders for testing
//! the pathmode library.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pathmode::config::environment::{
    ENV_APP_ROOT, ENV_CONTAINER_PROJECT_ROOT, ENV_CONTAINER_WORKSPACE_ROOT,
    ENV_DEBUG_PATH_DETECTION, ENV_FILE_PATH_MODE, ENV_HOST_WORKSPACE_ROOT, ENV_PROJECT_ANCHORS,
};
use pathmode::detect::StaticProbe;
use pathmode::{Config, OverrideMode, PathRuntime};

/// RAII guard for setting and restoring environment variables.
///
/// Note: Tests using environment variables should not run in parallel.
/// Use the `#[serial]` attribute.
#[allow(dead_code)]
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    pub fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Create a guard that removes the env var.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}

/// Clears every `MCP_*` variable pathmode reads, restoring them on drop.
#[allow(dead_code)]
pub fn clear_mcp_env_vars() -> Vec<EnvGuard> {
    [
        ENV_FILE_PATH_MODE,
        ENV_DEBUG_PATH_DETECTION,
        ENV_CONTAINER_PROJECT_ROOT,
        ENV_CONTAINER_WORKSPACE_ROOT,
        ENV_HOST_WORKSPACE_ROOT,
        ENV_PROJECT_ANCHORS,
        ENV_APP_ROOT,
    ]
    .iter()
    .map(|k| EnvGuard::remove(k))
    .collect()
}

/// Writes a config file and returns its path.
#[allow(dead_code)]
pub fn write_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// A runtime forced into containerized mode over an empty probe.
#[allow(dead_code)]
pub fn container_runtime(config: Config) -> PathRuntime {
    let config = Config {
        mode: Some(OverrideMode::Docker),
        ..config
    };
    PathRuntime::with_probe(config, Arc::new(StaticProbe::new()))
}

/// The default configuration with a host workspace root.
#[allow(dead_code)]
pub fn config_with_workspace(host_root: &str) -> Config {
    Config {
        host_workspace_root: Some(host_root.to_string()),
        ..Config::with_defaults()
    }
}
