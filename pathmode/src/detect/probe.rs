//! System probes used by mode detection.
//!
//! Every filesystem and environment read performed during detection goes
//! through [`SystemProbe`]. [`HostProbe`] reads the real system and
//! [`StaticProbe`] serves canned answers while counting calls.

use std::collections::{HashMap, HashSet};
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Read-only access to the signals mode detection looks at.
///
/// Implementations must not cache: callers decide how often to probe.
#[cfg_attr(test, mockall::automock)]
pub trait SystemProbe: Send + Sync {
    /// Whether `path` exists. Errors mean the check itself could not run.
    ///
    /// # Errors
    ///
    /// Returns an error if existence cannot be determined (e.g. permission denied).
    fn path_exists(&self, path: &Path) -> io::Result<bool>;

    /// Reads a small text file such as `/proc/1/cgroup`.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Reads an environment variable; `None` if unset or not unicode.
    fn env_var(&self, key: &str) -> Option<String>;

    /// The process working directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the working directory is unavailable.
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Path of the running executable.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable path is unavailable.
    fn current_exe(&self) -> io::Result<PathBuf>;

    /// The user's home directory, if one is configured.
    fn home_dir(&self) -> Option<PathBuf>;
}

/// Probes the real host.
///
/// # Examples
///
/// ```
/// use pathmode::detect::{HostProbe, SystemProbe};
///
/// let probe = HostProbe;
/// assert!(probe.current_dir().is_ok());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HostProbe;

impl SystemProbe for HostProbe {
    fn path_exists(&self, path: &Path) -> io::Result<bool> {
        path.try_exists()
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn env_var(&self, key: &str) -> Option<String> {
        env::var(key).ok()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        env::current_dir()
    }

    fn current_exe(&self) -> io::Result<PathBuf> {
        env::current_exe()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        home::home_dir()
    }
}

/// A fixed, in-memory view of a system that counts every probe call.
///
/// Anything not configured reads as absent. The call counter is the hook
/// tests use to prove detection ran once and skipped lower tiers.
///
/// # Examples
///
/// ```
/// use pathmode::detect::{StaticProbe, SystemProbe};
/// use std::path::Path;
///
/// let probe = StaticProbe::new()
///     .with_file("/.dockerenv", "")
///     .with_env("HOSTNAME", "0123456789ab");
///
/// assert!(probe.path_exists(Path::new("/.dockerenv")).unwrap());
/// assert_eq!(probe.env_var("HOSTNAME").as_deref(), Some("0123456789ab"));
/// assert_eq!(probe.probe_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct StaticProbe {
    files: HashMap<PathBuf, String>,
    dirs: HashSet<PathBuf>,
    unreadable: HashMap<PathBuf, io::ErrorKind>,
    env: HashMap<String, String>,
    cwd: Option<PathBuf>,
    exe: Option<PathBuf>,
    home: Option<PathBuf>,
    calls: AtomicUsize,
}

impl StaticProbe {
    /// An empty system: no files, no variables, no home.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A typical developer host: home and `/var/log` exist, working from
    /// inside the home directory, executable in a user-local bin dir.
    #[must_use]
    pub fn host_like() -> Self {
        Self::new()
            .with_dir("/home/dev")
            .with_dir("/var/log")
            .with_home("/home/dev")
            .with_cwd("/home/dev/src/zen-mcp-server")
            .with_exe("/home/dev/.cargo/bin/pathmode")
    }

    /// Adds a readable file (which also exists).
    #[must_use]
    pub fn with_file(mut self, path: impl Into<PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    /// Adds an existing directory.
    #[must_use]
    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }

    /// Makes every probe of `path` fail with `kind`.
    #[must_use]
    pub fn with_unreadable(mut self, path: impl Into<PathBuf>, kind: io::ErrorKind) -> Self {
        self.unreadable.insert(path.into(), kind);
        self
    }

    /// Sets an environment variable.
    #[must_use]
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env.insert(key.into(), value.into());
        self
    }

    /// Sets the working directory.
    #[must_use]
    pub fn with_cwd(mut self, path: impl Into<PathBuf>) -> Self {
        self.cwd = Some(path.into());
        self
    }

    /// Sets the executable path.
    #[must_use]
    pub fn with_exe(mut self, path: impl Into<PathBuf>) -> Self {
        self.exe = Some(path.into());
        self
    }

    /// Sets the home directory (it is not created; use [`Self::with_dir`]).
    #[must_use]
    pub fn with_home(mut self, path: impl Into<PathBuf>) -> Self {
        self.home = Some(path.into());
        self
    }

    /// Number of probe calls made so far.
    #[must_use]
    pub fn probe_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn tick(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }

    fn check_readable(&self, path: &Path) -> io::Result<()> {
        match self.unreadable.get(path) {
            Some(kind) => Err(io::Error::new(*kind, format!("{} is unreadable", path.display()))),
            None => Ok(()),
        }
    }
}

impl SystemProbe for StaticProbe {
    fn path_exists(&self, path: &Path) -> io::Result<bool> {
        self.tick();
        self.check_readable(path)?;
        Ok(self.files.contains_key(path) || self.dirs.contains(path))
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.tick();
        self.check_readable(path)?;
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("{} not found", path.display()))
        })
    }

    fn env_var(&self, key: &str) -> Option<String> {
        self.tick();
        self.env.get(key).cloned()
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        self.tick();
        self.cwd
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no working directory"))
    }

    fn current_exe(&self) -> io::Result<PathBuf> {
        self.tick();
        self.exe
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no executable path"))
    }

    fn home_dir(&self) -> Option<PathBuf> {
        self.tick();
        self.home.clone()
    }
}

impl<P: SystemProbe + ?Sized> SystemProbe for std::sync::Arc<P> {
    fn path_exists(&self, path: &Path) -> io::Result<bool> {
        (**self).path_exists(path)
    }

    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        (**self).read_to_string(path)
    }

    fn env_var(&self, key: &str) -> Option<String> {
        (**self).env_var(key)
    }

    fn current_dir(&self) -> io::Result<PathBuf> {
        (**self).current_dir()
    }

    fn current_exe(&self) -> io::Result<PathBuf> {
        (**self).current_exe()
    }

    fn home_dir(&self) -> Option<PathBuf> {
        (**self).home_dir()
    }
}
