//! Common test utilities for CLI integration tests.
//!
//! Every command runs from a fresh temporary directory with its own data
//! directory and no `MCP_*` variables, so the host's configuration never
//! leaks into a test.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Environment variables the library reads.
const MCP_ENV_VARS: [&str; 7] = [
    "MCP_FILE_PATH_MODE",
    "MCP_DEBUG_PATH_DETECTION",
    "MCP_CONTAINER_PROJECT_ROOT",
    "MCP_CONTAINER_WORKSPACE_ROOT",
    "MCP_HOST_WORKSPACE_ROOT",
    "MCP_PROJECT_ANCHORS",
    "MCP_APP_ROOT",
];

/// Test environment with isolated working and data directories.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory, used as the working directory
    pub temp_path: PathBuf,
    /// Path to the pathmode data directory
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let data_dir = temp_path.join("pathmode-data");
        std::fs::create_dir_all(&data_dir).expect("Failed to create data dir");

        Self {
            temp_dir,
            temp_path,
            data_dir,
        }
    }

    /// Get a command with a scrubbed environment but no `--data-dir`.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathmode").expect("Failed to find pathmode binary");
        cmd.current_dir(&self.temp_path);
        cmd.env_remove("PATHMODE_DATA_DIR");
        cmd.env_remove("PATHMODE_LOG_MODE");
        for var in MCP_ENV_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command with the data directory pre-configured.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Get a command forced into containerized mode.
    pub fn container_command(&self) -> Command {
        let mut cmd = self.command();
        cmd.arg("--mode").arg("docker");
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file under the temporary directory and return its path.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout_of(mut cmd: Command) -> String {
        let output = cmd.output().expect("Failed to run pathmode");
        assert!(
            output.status.success(),
            "pathmode failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
