//! Host platform detection.
//!
//! The probe reads ambient system signals once (see [`SystemSignals`]) and
//! maps them to a normalized [`PlatformInfo`]. Detection never fails:
//! anything the tool cannot place maps to the `Unsupported` variants and
//! is rejected later by the planner.

pub mod probe;
pub mod signals;

pub use probe::probe;
pub use signals::SystemSignals;

use std::fmt;

/// Remediation printed when the host is native Windows (non-WSL).
pub const WSL_REMEDIATION: &str =
    "Run 'wsl --install' in an administrator PowerShell, then re-run pocketstack \
     inside your WSL distribution";

/// Normalized operating-system family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OsFamily {
    Darwin,
    Linux,
    Windows,
    /// Windows Subsystem for Linux. Runs `linux` binaries.
    Wsl,
    Unsupported,
}

impl OsFamily {
    /// Whether a PocketBase binary exists for this OS family.
    pub fn is_supported(&self) -> bool {
        !matches!(self, OsFamily::Windows | OsFamily::Unsupported)
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OsFamily::Darwin => "darwin",
            OsFamily::Linux => "linux",
            OsFamily::Windows => "windows",
            OsFamily::Wsl => "wsl",
            OsFamily::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// Normalized CPU architecture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arch {
    Amd64,
    Arm64,
    Armv7,
    Ppc64le,
    S390x,
    Unsupported,
}

impl Arch {
    /// Whether a PocketBase binary exists for this architecture.
    pub fn is_supported(&self) -> bool {
        !matches!(self, Arch::Unsupported)
    }
}

impl fmt::Display for Arch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Arch::Amd64 => "amd64",
            Arch::Arm64 => "arm64",
            Arch::Armv7 => "armv7",
            Arch::Ppc64le => "ppc64le",
            Arch::S390x => "s390x",
            Arch::Unsupported => "unsupported",
        };
        f.write_str(name)
    }
}

/// The system package manager applicable for remediation commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SystemPackageManager {
    Apt,
    Dnf,
    Pacman,
    Brew,
    /// No recognized package manager; remediation falls back to a
    /// generic manual-install message.
    None,
}

/// The probed host platform. Immutable once created; probed once per run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlatformInfo {
    pub os_family: OsFamily,
    pub arch: Arch,
    pub package_manager: SystemPackageManager,
}

impl PlatformInfo {
    /// Whether the platform can receive a PocketBase binary at all.
    pub fn is_supported(&self) -> bool {
        self.os_family.is_supported() && self.arch.is_supported()
    }

    /// Whether the shell should ask for a soft confirmation because the
    /// Linux distribution was not recognized.
    pub fn needs_distro_confirmation(&self) -> bool {
        matches!(self.os_family, OsFamily::Linux | OsFamily::Wsl)
            && self.package_manager == SystemPackageManager::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn os_family_display_is_lowercase() {
        assert_eq!(OsFamily::Darwin.to_string(), "darwin");
        assert_eq!(OsFamily::Linux.to_string(), "linux");
        assert_eq!(OsFamily::Wsl.to_string(), "wsl");
        assert_eq!(OsFamily::Unsupported.to_string(), "unsupported");
    }

    #[test]
    fn windows_is_not_supported() {
        assert!(!OsFamily::Windows.is_supported());
        assert!(OsFamily::Wsl.is_supported());
    }

    #[test]
    fn arch_display_matches_release_naming() {
        assert_eq!(Arch::Amd64.to_string(), "amd64");
        assert_eq!(Arch::Arm64.to_string(), "arm64");
        assert_eq!(Arch::Armv7.to_string(), "armv7");
        assert_eq!(Arch::Ppc64le.to_string(), "ppc64le");
        assert_eq!(Arch::S390x.to_string(), "s390x");
    }

    #[test]
    fn platform_supported_requires_both_axes() {
        let platform = PlatformInfo {
            os_family: OsFamily::Linux,
            arch: Arch::Unsupported,
            package_manager: SystemPackageManager::Apt,
        };
        assert!(!platform.is_supported());

        let platform = PlatformInfo {
            os_family: OsFamily::Linux,
            arch: Arch::Amd64,
            package_manager: SystemPackageManager::Apt,
        };
        assert!(platform.is_supported());
    }

    #[test]
    fn unknown_distro_needs_confirmation() {
        let platform = PlatformInfo {
            os_family: OsFamily::Linux,
            arch: Arch::Amd64,
            package_manager: SystemPackageManager::None,
        };
        assert!(platform.needs_distro_confirmation());
    }

    #[test]
    fn darwin_never_needs_distro_confirmation() {
        let platform = PlatformInfo {
            os_family: OsFamily::Darwin,
            arch: Arch::Arm64,
            package_manager: SystemPackageManager::Brew,
        };
        assert!(!platform.needs_distro_confirmation());
    }
}
