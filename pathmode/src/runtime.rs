//! The process-wide path runtime: detection cached once, conversion on demand.

use std::sync::{Arc, OnceLock};

use crate::config::Config;
use crate::detect::{
    DetectionResult, Evidence, ExecutionMode, HostProbe, ModeDetector, OverrideMode,
    PlatformInfo, SystemProbe,
};
use crate::path::{ConvertedPath, PathConverter, PathSyntax};

/// Detection outcome and the converter built for it.
#[derive(Debug)]
struct Resolved {
    detection: DetectionResult,
    converter: PathConverter,
}

/// Explicit context object owning the cached detection result.
///
/// Detection runs at most once, on first use, no matter how many threads
/// race to it; every later read is lock-free. [`PathRuntime::reset`] and
/// [`PathRuntime::set_override`] take `&mut self`, so they cannot overlap
/// with readers.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use pathmode::config::Config;
/// use pathmode::detect::StaticProbe;
/// use pathmode::{ExecutionMode, PathRuntime};
///
/// let probe = Arc::new(StaticProbe::host_like().with_file("/.dockerenv", ""));
/// let runtime = PathRuntime::with_probe(Config::with_defaults(), probe.clone());
///
/// assert_eq!(runtime.mode(), ExecutionMode::Containerized);
/// assert_eq!(
///     runtime.convert_path(r"C:\Users\G\zen-mcp-server\tools\chat.py"),
///     "/app/project/tools/chat.py"
/// );
///
/// // Detection ran exactly once.
/// let probes = probe.probe_count();
/// let _ = runtime.mode();
/// assert_eq!(probe.probe_count(), probes);
/// ```
pub struct PathRuntime {
    probe: Arc<dyn SystemProbe>,
    config: Config,
    resolved: OnceLock<Resolved>,
}

impl PathRuntime {
    /// A runtime over the real host with the given configuration.
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self::with_probe(config, Arc::new(HostProbe))
    }

    /// A runtime over an arbitrary probe.
    #[must_use]
    pub fn with_probe(config: Config, probe: Arc<dyn SystemProbe>) -> Self {
        Self {
            probe,
            config,
            resolved: OnceLock::new(),
        }
    }

    /// The configuration this runtime was built from.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    fn resolved(&self) -> &Resolved {
        self.resolved.get_or_init(|| {
            let settings = self.config.detection_settings();
            let detection = ModeDetector::new(&*self.probe, &settings).detect();
            let converter = PathConverter::new(
                self.config.conversion_context(detection.mode),
                self.config.effective_anchor(),
            )
            .with_debug(settings.debug);
            log::debug!("Path mode: {} ({})", detection.mode, detection.method);
            Resolved {
                detection,
                converter,
            }
        })
    }

    /// The detected execution mode.
    #[must_use]
    pub fn mode(&self) -> ExecutionMode {
        self.resolved().detection.mode
    }

    /// Whether paths are being converted for a container.
    #[must_use]
    pub fn is_containerized(&self) -> bool {
        self.mode().is_containerized()
    }

    /// The full cached detection result.
    #[must_use]
    pub fn detection(&self) -> &DetectionResult {
        &self.resolved().detection
    }

    /// Evidence behind the decision; `None` unless debug mode is enabled.
    #[must_use]
    pub fn evidence(&self) -> Option<&[Evidence]> {
        if self.config.effective_debug() {
            Some(&self.resolved().detection.evidence)
        } else {
            None
        }
    }

    /// The converter for the detected mode.
    #[must_use]
    pub fn converter(&self) -> &PathConverter {
        &self.resolved().converter
    }

    /// Converts `input` for the detected mode.
    #[must_use]
    pub fn convert_path(&self, input: &str) -> String {
        self.converter().convert(input)
    }

    /// Converts `input` for the detected mode, reporting how.
    #[must_use]
    pub fn convert_path_detailed(&self, input: &str) -> ConvertedPath {
        self.converter().convert_detailed(input)
    }

    /// Converts `input` for an explicit target mode.
    #[must_use]
    pub fn convert_path_as(&self, input: &str, mode: ExecutionMode) -> ConvertedPath {
        self.converter().convert_for_mode(input, mode)
    }

    /// Lexical class of `input` against the configured container roots.
    #[must_use]
    pub fn classify(&self, input: &str) -> PathSyntax {
        self.converter().classify(input)
    }

    /// Describes the host platform (not cached).
    #[must_use]
    pub fn platform_info(&self) -> PlatformInfo {
        PlatformInfo::detect(&*self.probe)
    }

    /// Drops the cached result; the next query detects again.
    pub fn reset(&mut self) {
        self.resolved = OnceLock::new();
    }

    /// Replaces the override and drops the cached result.
    pub fn set_override(&mut self, mode: OverrideMode) {
        self.config.mode = Some(mode);
        self.reset();
    }
}

impl Default for PathRuntime {
    fn default() -> Self {
        Self::from_config(Config::with_defaults())
    }
}

impl std::fmt::Debug for PathRuntime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PathRuntime")
            .field("config", &self.config)
            .field("detection", &self.resolved.get().map(|r| &r.detection))
            .finish_non_exhaustive()
    }
}
