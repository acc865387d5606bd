//! Ambient system signals.
//!
//! Everything the platform probe needs from the host is captured here in
//! one pass and treated as immutable data afterwards. This keeps
//! [`probe`](super::probe::probe) a pure function that can be tested with
//! hand-built signal sets instead of real OS state.

use std::path::Path;
use std::process::Command;

/// A one-shot snapshot of the signals the probe inspects.
#[derive(Debug, Clone, Default)]
pub struct SystemSignals {
    /// Kernel name as reported by `uname -s` (e.g. "Linux", "Darwin").
    pub kernel_name: String,
    /// Kernel release as reported by `uname -r`. WSL kernels embed a
    /// "microsoft" marker here.
    pub kernel_release: String,
    /// Machine hardware name as reported by `uname -m` (e.g. "x86_64").
    pub machine: String,
    /// Native Windows environment marker (`OS=Windows_NT`).
    pub windows_env: bool,
    /// `/etc/debian_version` exists.
    pub debian_marker: bool,
    /// `/etc/fedora-release` or `/etc/redhat-release` exists.
    pub fedora_marker: bool,
    /// `/etc/arch-release` exists.
    pub arch_marker: bool,
}

impl SystemSignals {
    /// Capture signals from the running host.
    ///
    /// Never fails: a missing `uname` or unreadable marker file degrades
    /// to empty/false fields, which the probe maps to `Unsupported`.
    pub fn capture() -> Self {
        Self {
            kernel_name: uname("-s"),
            kernel_release: uname("-r"),
            machine: uname("-m"),
            windows_env: std::env::var("OS")
                .map(|v| v.contains("Windows_NT"))
                .unwrap_or(false),
            debian_marker: Path::new("/etc/debian_version").exists(),
            fedora_marker: Path::new("/etc/fedora-release").exists()
                || Path::new("/etc/redhat-release").exists(),
            arch_marker: Path::new("/etc/arch-release").exists(),
        }
    }
}

/// Run `uname` with a single flag, returning an empty string on any failure.
fn uname(flag: &str) -> String {
    Command::new("uname")
        .arg(flag)
        .output()
        .ok()
        .filter(|out| out.status.success())
        .map(|out| String::from_utf8_lossy(&out.stdout).trim().to_string())
        .unwrap_or_default()
}

/// Check whether the current process runs with elevated privileges.
///
/// Installing into a user project as root leaves root-owned node_modules
/// behind, so the shell warns before proceeding.
pub fn is_elevated() -> bool {
    #[cfg(unix)]
    {
        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        unsafe { libc::geteuid() == 0 }
    }

    #[cfg(not(unix))]
    {
        false
    }
}
