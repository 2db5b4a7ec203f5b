//! The tiered container/host detection algorithm.
//!
//! Tiers run in order and the first decisive tier wins; lower tiers are not
//! probed at all:
//!
//! 1. **Override**: an explicit `docker` or `local` setting.
//! 2. **Native indicators**: `/.dockerenv`, a container runtime in
//!    `/proc/1/cgroup`, container environment variables, or a host name that
//!    looks like an auto-generated container id.
//! 3. **Runtime heuristics**: working directory under the app root, an
//!    executable in a system-wide bin directory, or a missing home/log
//!    directory.
//!
//! Nothing here can fail. A probe that errors counts as a negative signal,
//! and when every tier is inconclusive the result is `Host`.

use std::io;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use super::probe::SystemProbe;
use super::types::{DetectionMethod, DetectionResult, Evidence, ExecutionMode, OverrideMode};

/// Marker file Docker creates at the container root.
pub const DOCKERENV_PATH: &str = "/.dockerenv";

/// Control-group membership of PID 1.
pub const CGROUP_PATH: &str = "/proc/1/cgroup";

/// Fallback source for the host name when `HOSTNAME` is unset.
pub const HOSTNAME_PATH: &str = "/etc/hostname";

/// System log directory; minimal container images often lack it.
pub const LOG_DIR_PATH: &str = "/var/log";

/// Default container application root for the working-directory heuristic.
pub const DEFAULT_APP_ROOT: &str = "/app";

/// Substrings in the cgroup record that identify a container runtime.
pub const CGROUP_RUNTIME_MARKERS: &[&str] = &["docker", "containerd", "kubepods", "libpod", "lxc"];

/// Environment variables set by container runtimes and orchestrators.
pub const CONTAINER_ENV_VARS: &[&str] = &["DOCKER_CONTAINER", "KUBERNETES_SERVICE_HOST"];

/// System-wide binary directories (as opposed to user-local ones).
pub const SYSTEM_BIN_DIRS: &[&str] = &["/usr/local/bin", "/usr/bin", "/usr/sbin", "/bin", "/sbin"];

static CONTAINER_ID_RE: OnceLock<Regex> = OnceLock::new();

fn looks_like_container_id(hostname: &str) -> bool {
    let re = CONTAINER_ID_RE
        .get_or_init(|| Regex::new(r"^[0-9a-f]{12}$").expect("container id regex"));
    re.is_match(hostname)
}

/// Inputs that steer detection, supplied by configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionSettings {
    /// The three-valued override.
    pub override_mode: OverrideMode,
    /// Record every evaluated probe into the result's evidence.
    pub debug: bool,
    /// Container application root for the working-directory heuristic.
    pub app_root: PathBuf,
}

impl Default for DetectionSettings {
    fn default() -> Self {
        Self {
            override_mode: OverrideMode::Auto,
            debug: false,
            app_root: PathBuf::from(DEFAULT_APP_ROOT),
        }
    }
}

/// Collects evidence only when debugging, so recording never costs a probe.
struct Recorder {
    debug: bool,
    evidence: Vec<Evidence>,
}

impl Recorder {
    fn record(&mut self, signal: &str, observed: impl FnOnce() -> String) {
        if self.debug {
            self.evidence.push(Evidence::new(signal, observed()));
        }
    }
}

/// Outcome of a single probe.
enum Signal {
    Positive(String),
    Negative(String),
}

impl Signal {
    fn from_io(result: io::Result<bool>, positive: &str, negative: &str) -> Self {
        match result {
            Ok(true) => Self::Positive(positive.to_string()),
            Ok(false) => Self::Negative(negative.to_string()),
            Err(e) => Self::Negative(format!("unreadable: {e}")),
        }
    }
}

/// Runs the detection tiers against a [`SystemProbe`].
///
/// The detector itself is stateless; caching the result is the job of
/// [`crate::PathRuntime`].
///
/// # Examples
///
/// ```
/// use pathmode::detect::{DetectionSettings, ModeDetector, StaticProbe};
/// use pathmode::{DetectionMethod, ExecutionMode};
///
/// let probe = StaticProbe::host_like().with_file("/.dockerenv", "");
/// let settings = DetectionSettings::default();
///
/// let result = ModeDetector::new(&probe, &settings).detect();
/// assert_eq!(result.mode, ExecutionMode::Containerized);
/// assert_eq!(result.method, DetectionMethod::NativeIndicator);
/// ```
pub struct ModeDetector<'a> {
    probe: &'a dyn SystemProbe,
    settings: &'a DetectionSettings,
}

impl<'a> ModeDetector<'a> {
    /// Creates a detector over `probe`.
    #[must_use]
    pub fn new(probe: &'a dyn SystemProbe, settings: &'a DetectionSettings) -> Self {
        Self { probe, settings }
    }

    /// Runs the tiers and returns a definite result.
    #[must_use]
    pub fn detect(&self) -> DetectionResult {
        let mut recorder = Recorder {
            debug: self.settings.debug,
            evidence: Vec::new(),
        };

        let (mode, method) = if let Some(mode) = self.override_tier(&mut recorder) {
            (mode, DetectionMethod::EnvOverride)
        } else if self.native_tier(&mut recorder) {
            (ExecutionMode::Containerized, DetectionMethod::NativeIndicator)
        } else if self.heuristic_tier(&mut recorder) {
            (ExecutionMode::Containerized, DetectionMethod::RuntimeHeuristic)
        } else {
            recorder.record("fallback", || "no container signal".to_string());
            (ExecutionMode::Host, DetectionMethod::RuntimeHeuristic)
        };

        if self.settings.debug {
            log::debug!("execution mode resolved to {mode} via {method}");
            for entry in &recorder.evidence {
                log::debug!("  {entry}");
            }
        }

        DetectionResult::new(mode, method, recorder.evidence)
    }

    fn override_tier(&self, recorder: &mut Recorder) -> Option<ExecutionMode> {
        let override_mode = self.settings.override_mode;
        recorder.record("override", || override_mode.to_string());
        override_mode.forced_mode()
    }

    fn native_tier(&self, recorder: &mut Recorder) -> bool {
        let checks: [fn(&Self) -> Signal; 4] = [
            Self::probe_dockerenv,
            Self::probe_cgroup,
            Self::probe_container_env,
            Self::probe_hostname,
        ];
        let names = ["dockerenv", "cgroup", "container_env", "hostname"];
        Self::run_until_positive(self, recorder, &names, &checks)
    }

    fn heuristic_tier(&self, recorder: &mut Recorder) -> bool {
        let checks: [fn(&Self) -> Signal; 4] = [
            Self::probe_cwd,
            Self::probe_executable,
            Self::probe_home_dir,
            Self::probe_log_dir,
        ];
        let names = ["cwd", "executable", "home_dir", "log_dir"];
        Self::run_until_positive(self, recorder, &names, &checks)
    }

    fn run_until_positive(
        &self,
        recorder: &mut Recorder,
        names: &[&str],
        checks: &[fn(&Self) -> Signal],
    ) -> bool {
        for (name, check) in names.iter().zip(checks) {
            match check(self) {
                Signal::Positive(observed) => {
                    recorder.record(name, || format!("positive ({observed})"));
                    return true;
                }
                Signal::Negative(observed) => {
                    recorder.record(name, || format!("negative ({observed})"));
                }
            }
        }
        false
    }

    fn probe_dockerenv(&self) -> Signal {
        Signal::from_io(
            self.probe.path_exists(Path::new(DOCKERENV_PATH)),
            "present",
            "absent",
        )
    }

    fn probe_cgroup(&self) -> Signal {
        match self.probe.read_to_string(Path::new(CGROUP_PATH)) {
            Ok(contents) => {
                let contents = contents.to_lowercase();
                match CGROUP_RUNTIME_MARKERS
                    .iter()
                    .find(|marker| contents.contains(*marker))
                {
                    Some(marker) => Signal::Positive(format!("mentions {marker}")),
                    None => Signal::Negative("no runtime marker".to_string()),
                }
            }
            Err(e) => Signal::Negative(format!("unreadable: {e}")),
        }
    }

    fn probe_container_env(&self) -> Signal {
        for key in CONTAINER_ENV_VARS {
            if let Some(value) = self.probe.env_var(key) {
                if !value.trim().is_empty() {
                    return Signal::Positive(format!("{key} is set"));
                }
            }
        }
        Signal::Negative("no container variables".to_string())
    }

    fn probe_hostname(&self) -> Signal {
        let hostname = match self.probe.env_var("HOSTNAME") {
            Some(name) if !name.trim().is_empty() => name,
            _ => match self.probe.read_to_string(Path::new(HOSTNAME_PATH)) {
                Ok(name) => name,
                Err(e) => return Signal::Negative(format!("unreadable: {e}")),
            },
        };
        let hostname = hostname.trim();
        if looks_like_container_id(hostname) {
            Signal::Positive(hostname.to_string())
        } else {
            Signal::Negative(hostname.to_string())
        }
    }

    fn probe_cwd(&self) -> Signal {
        match self.probe.current_dir() {
            Ok(cwd) if cwd.starts_with(&self.settings.app_root) => {
                Signal::Positive(cwd.display().to_string())
            }
            Ok(cwd) => Signal::Negative(cwd.display().to_string()),
            Err(e) => Signal::Negative(format!("unreadable: {e}")),
        }
    }

    fn probe_executable(&self) -> Signal {
        match self.probe.current_exe() {
            Ok(exe) if SYSTEM_BIN_DIRS.iter().any(|dir| exe.starts_with(dir)) => {
                Signal::Positive(exe.display().to_string())
            }
            Ok(exe) => Signal::Negative(exe.display().to_string()),
            Err(e) => Signal::Negative(format!("unreadable: {e}")),
        }
    }

    fn probe_home_dir(&self) -> Signal {
        match self.probe.home_dir() {
            None => Signal::Positive("no home directory configured".to_string()),
            Some(home) => match self.probe.path_exists(&home) {
                Ok(true) => Signal::Negative(home.display().to_string()),
                Ok(false) => Signal::Positive(format!("{} missing", home.display())),
                Err(e) => Signal::Negative(format!("unreadable: {e}")),
            },
        }
    }

    fn probe_log_dir(&self) -> Signal {
        match self.probe.path_exists(Path::new(LOG_DIR_PATH)) {
            Ok(true) => Signal::Negative("present".to_string()),
            Ok(false) => Signal::Positive("missing".to_string()),
            Err(e) => Signal::Negative(format!("unreadable: {e}")),
        }
    }
}
