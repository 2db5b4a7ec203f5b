//! Execution-mode detection: am I inside a container or on the host?
//!
//! Detection is a short-circuiting chain of tiers (explicit override,
//! native container indicators, runtime heuristics) evaluated through a
//! [`SystemProbe`]. See [`ModeDetector`] for the exact order.
//!
//! # Examples
//!
//! ```
//! use pathmode::detect::{DetectionSettings, ModeDetector, StaticProbe};
//! use pathmode::{ExecutionMode, OverrideMode};
//!
//! let probe = StaticProbe::host_like().with_file("/.dockerenv", "");
//! let settings = DetectionSettings {
//!     override_mode: OverrideMode::Local,
//!     ..Default::default()
//! };
//!
//! // The explicit override wins over the marker file.
//! let result = ModeDetector::new(&probe, &settings).detect();
//! assert_eq!(result.mode, ExecutionMode::Host);
//! ```

mod detector;
mod platform;
mod probe;
mod types;

pub use detector::{
    DetectionSettings, ModeDetector, CGROUP_PATH, CGROUP_RUNTIME_MARKERS, CONTAINER_ENV_VARS,
    DEFAULT_APP_ROOT, DOCKERENV_PATH, HOSTNAME_PATH, LOG_DIR_PATH, SYSTEM_BIN_DIRS,
};
pub use platform::{PlatformInfo, PROC_VERSION_PATH};
pub use probe::{HostProbe, StaticProbe, SystemProbe};
pub use types::{DetectionMethod, DetectionResult, Evidence, ExecutionMode, OverrideMode};
