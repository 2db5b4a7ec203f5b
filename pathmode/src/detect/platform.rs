//! Host platform description, including WSL2 detection.

use std::fmt;
use std::path::Path;

use serde::Serialize;

use super::probe::SystemProbe;

/// Kernel version string; WSL kernels mention Microsoft or WSL here.
pub const PROC_VERSION_PATH: &str = "/proc/version";

/// Basic facts about the operating system the process runs on.
///
/// # Examples
///
/// ```
/// use pathmode::detect::{PlatformInfo, StaticProbe};
///
/// let probe = StaticProbe::new()
///     .with_file("/proc/version", "Linux version 5.15.90.1-microsoft-standard-WSL2");
/// let info = PlatformInfo::from_parts("linux", &probe);
/// assert!(info.is_linux);
/// assert!(info.is_wsl);
/// ```
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlatformInfo {
    /// Operating system name as reported by the standard library.
    pub system: String,
    /// Running on Windows.
    pub is_windows: bool,
    /// Running on Linux (including WSL).
    pub is_linux: bool,
    /// Running on macOS.
    pub is_macos: bool,
    /// Running on Linux under WSL.
    pub is_wsl: bool,
}

impl PlatformInfo {
    /// Describes the current process's platform.
    #[must_use]
    pub fn detect(probe: &dyn SystemProbe) -> Self {
        Self::from_parts(std::env::consts::OS, probe)
    }

    /// Describes a platform named `os`, reading the kernel version through `probe`.
    #[must_use]
    pub fn from_parts(os: &str, probe: &dyn SystemProbe) -> Self {
        let is_linux = os == "linux";
        let is_wsl = is_linux
            && probe
                .read_to_string(Path::new(PROC_VERSION_PATH))
                .map(|version| {
                    let version = version.to_lowercase();
                    version.contains("microsoft") || version.contains("wsl")
                })
                .unwrap_or(false);

        if is_wsl {
            log::debug!("WSL2 environment detected");
        }

        Self {
            system: os.to_string(),
            is_windows: os == "windows",
            is_linux,
            is_macos: os == "macos",
            is_wsl,
        }
    }
}

impl fmt::Display for PlatformInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.system)?;
        if self.is_wsl {
            write!(f, " (WSL)")?;
        }
        Ok(())
    }
}
