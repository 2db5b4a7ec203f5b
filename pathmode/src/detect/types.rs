//! Core types for execution-mode detection.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Whether the process runs on the bare host or inside a container.
///
/// # Examples
///
/// ```
/// use pathmode::ExecutionMode;
///
/// assert!(ExecutionMode::Containerized.is_containerized());
/// assert_eq!(ExecutionMode::Host.to_string(), "host");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Running natively on the developer's machine.
    #[value(alias = "local")]
    Host,
    /// Running inside a container with fixed mount points.
    #[value(alias = "docker")]
    Containerized,
}

impl ExecutionMode {
    /// Returns true for [`ExecutionMode::Containerized`].
    #[must_use]
    pub const fn is_containerized(self) -> bool {
        matches!(self, Self::Containerized)
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Host => write!(f, "host"),
            Self::Containerized => write!(f, "containerized"),
        }
    }
}

/// Which detection tier resolved the mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMethod {
    /// An explicit `docker`/`local` override decided.
    EnvOverride,
    /// A native container indicator (marker file, cgroup, env, hostname).
    NativeIndicator,
    /// Weak runtime signals, or the default when nothing matched.
    RuntimeHeuristic,
}

impl fmt::Display for DetectionMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EnvOverride => write!(f, "env_override"),
            Self::NativeIndicator => write!(f, "native_indicator"),
            Self::RuntimeHeuristic => write!(f, "runtime_heuristic"),
        }
    }
}

/// The externally configured override, three-valued.
///
/// # Examples
///
/// ```
/// use pathmode::OverrideMode;
///
/// assert_eq!("DOCKER".parse::<OverrideMode>().unwrap(), OverrideMode::Docker);
/// assert!("bogus".parse::<OverrideMode>().is_err());
/// ```
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum OverrideMode {
    /// Run the native and heuristic tiers.
    #[default]
    Auto,
    /// Force [`ExecutionMode::Containerized`].
    Docker,
    /// Force [`ExecutionMode::Host`].
    Local,
}

impl OverrideMode {
    /// The mode this override forces, if any.
    #[must_use]
    pub const fn forced_mode(self) -> Option<ExecutionMode> {
        match self {
            Self::Auto => None,
            Self::Docker => Some(ExecutionMode::Containerized),
            Self::Local => Some(ExecutionMode::Host),
        }
    }
}

impl FromStr for OverrideMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "auto" => Ok(Self::Auto),
            "docker" => Ok(Self::Docker),
            "local" => Ok(Self::Local),
            other => Err(Error::Validation {
                field: "mode".into(),
                message: format!("expected auto, docker or local, got '{other}'"),
            }),
        }
    }
}

impl fmt::Display for OverrideMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Auto => write!(f, "auto"),
            Self::Docker => write!(f, "docker"),
            Self::Local => write!(f, "local"),
        }
    }
}

/// One observed signal, kept for diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Evidence {
    /// Name of the probe, e.g. `dockerenv` or `env:DOCKER_CONTAINER`.
    pub signal: String,
    /// What the probe saw.
    pub observed: String,
}

impl Evidence {
    /// Creates an evidence entry.
    pub fn new(signal: impl Into<String>, observed: impl Into<String>) -> Self {
        Self {
            signal: signal.into(),
            observed: observed.into(),
        }
    }
}

impl fmt::Display for Evidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.signal, self.observed)
    }
}

/// The outcome of mode detection, produced once per runtime.
///
/// `evidence` is empty unless detection ran with the debug flag set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetectionResult {
    /// The resolved mode.
    pub mode: ExecutionMode,
    /// The tier that resolved it.
    pub method: DetectionMethod,
    /// Ordered probe observations.
    pub evidence: Vec<Evidence>,
    /// When detection ran.
    pub detected_at: DateTime<Utc>,
}

impl DetectionResult {
    /// Creates a result stamped with the current time.
    #[must_use]
    pub fn new(mode: ExecutionMode, method: DetectionMethod, evidence: Vec<Evidence>) -> Self {
        Self {
            mode,
            method,
            evidence,
            detected_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_parse_is_case_insensitive() {
        assert_eq!("Docker".parse::<OverrideMode>().unwrap(), OverrideMode::Docker);
        assert_eq!(" LOCAL ".parse::<OverrideMode>().unwrap(), OverrideMode::Local);
        assert_eq!("auto".parse::<OverrideMode>().unwrap(), OverrideMode::Auto);
        assert_eq!("".parse::<OverrideMode>().unwrap(), OverrideMode::Auto);
    }

    #[test]
    fn test_override_parse_rejects_unknown() {
        let err = "container".parse::<OverrideMode>().unwrap_err();
        assert!(err.is_validation());
    }

    #[test]
    fn test_forced_modes() {
        assert_eq!(OverrideMode::Auto.forced_mode(), None);
        assert_eq!(
            OverrideMode::Docker.forced_mode(),
            Some(ExecutionMode::Containerized)
        );
        assert_eq!(OverrideMode::Local.forced_mode(), Some(ExecutionMode::Host));
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for mode in [OverrideMode::Auto, OverrideMode::Docker, OverrideMode::Local] {
            assert_eq!(mode.to_string().parse::<OverrideMode>().unwrap(), mode);
        }
    }

    #[test]
    fn test_result_serializes_method_in_snake_case() {
        let result = DetectionResult::new(
            ExecutionMode::Containerized,
            DetectionMethod::NativeIndicator,
            vec![Evidence::new("dockerenv", "present")],
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["mode"], "containerized");
        assert_eq!(json["method"], "native_indicator");
        assert_eq!(json["evidence"][0]["signal"], "dockerenv");
    }

    #[test]
    fn test_evidence_display() {
        assert_eq!(
            Evidence::new("cwd", "/app/project").to_string(),
            "cwd: /app/project"
        );
    }
}
