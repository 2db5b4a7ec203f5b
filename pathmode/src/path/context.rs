//! Conversion context: the fixed inputs a converter works against.

use serde::Serialize;

use super::syntax::trim_root;
use crate::detect::ExecutionMode;

/// Where the project is mounted inside the container by default.
pub const DEFAULT_CONTAINER_PROJECT_ROOT: &str = "/app/project";

/// Where the external workspace is mounted inside the container by default.
pub const DEFAULT_CONTAINER_WORKSPACE_ROOT: &str = "/workspace";

/// Mode and mount points for path conversion.
///
/// Roots are stored without trailing slashes. A context is immutable once
/// built; use [`ConversionContext::with_mode`] to derive one for another mode.
///
/// # Examples
///
/// ```
/// use pathmode::path::ConversionContext;
/// use pathmode::ExecutionMode;
///
/// let ctx = ConversionContext::new(ExecutionMode::Containerized, "/app/project/", "/workspace")
///     .with_host_workspace_root(Some(r"C:\Users\G\ext".to_string()));
/// assert_eq!(ctx.container_project_root(), "/app/project");
/// assert_eq!(ctx.host_workspace_root(), Some(r"C:\Users\G\ext"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversionContext {
    mode: ExecutionMode,
    container_project_root: String,
    container_workspace_root: String,
    host_workspace_root: Option<String>,
}

impl ConversionContext {
    /// Creates a context with no host workspace root.
    pub fn new(
        mode: ExecutionMode,
        container_project_root: impl AsRef<str>,
        container_workspace_root: impl AsRef<str>,
    ) -> Self {
        Self {
            mode,
            container_project_root: trim_root(container_project_root.as_ref()).to_string(),
            container_workspace_root: trim_root(container_workspace_root.as_ref()).to_string(),
            host_workspace_root: None,
        }
    }

    /// Sets the host directory mounted at the container workspace root.
    ///
    /// Blank values are treated as unset.
    #[must_use]
    pub fn with_host_workspace_root(mut self, root: Option<String>) -> Self {
        self.host_workspace_root = root.filter(|r| !r.trim().is_empty());
        self
    }

    /// The same roots under a different mode.
    #[must_use]
    pub fn with_mode(&self, mode: ExecutionMode) -> Self {
        Self {
            mode,
            ..self.clone()
        }
    }

    /// The mode conversions run in.
    #[must_use]
    pub const fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Container project root.
    #[must_use]
    pub fn container_project_root(&self) -> &str {
        &self.container_project_root
    }

    /// Container workspace root.
    #[must_use]
    pub fn container_workspace_root(&self) -> &str {
        &self.container_workspace_root
    }

    /// Host workspace root, if configured.
    #[must_use]
    pub fn host_workspace_root(&self) -> Option<&str> {
        self.host_workspace_root.as_deref()
    }

    /// Both container roots, for canonical-path checks.
    #[must_use]
    pub fn canonical_roots(&self) -> [&str; 2] {
        [&self.container_project_root, &self.container_workspace_root]
    }
}

impl Default for ConversionContext {
    fn default() -> Self {
        Self::new(
            ExecutionMode::Host,
            DEFAULT_CONTAINER_PROJECT_ROOT,
            DEFAULT_CONTAINER_WORKSPACE_ROOT,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roots_are_trimmed() {
        let ctx = ConversionContext::new(ExecutionMode::Host, "/srv/app//", "/mnt/ws/");
        assert_eq!(ctx.canonical_roots(), ["/srv/app", "/mnt/ws"]);
    }

    #[test]
    fn test_blank_host_workspace_is_unset() {
        let ctx = ConversionContext::default().with_host_workspace_root(Some("  ".into()));
        assert_eq!(ctx.host_workspace_root(), None);
    }

    #[test]
    fn test_with_mode_keeps_roots() {
        let ctx = ConversionContext::default()
            .with_host_workspace_root(Some("/home/u/ext".into()))
            .with_mode(ExecutionMode::Containerized);
        assert_eq!(ctx.mode(), ExecutionMode::Containerized);
        assert_eq!(ctx.container_project_root(), DEFAULT_CONTAINER_PROJECT_ROOT);
        assert_eq!(ctx.host_workspace_root(), Some("/home/u/ext"));
    }
}
