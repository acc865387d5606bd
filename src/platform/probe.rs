//! Platform probe: signals in, normalized platform out.

use super::signals::SystemSignals;
use super::{Arch, OsFamily, PlatformInfo, SystemPackageManager};

/// Map captured signals to a normalized platform description.
///
/// Pure and total: every input produces a `PlatformInfo`, with anything
/// unrecognized landing on the `Unsupported` variants. Signals are tested
/// in fixed priority order; WSL is checked before native Windows because a
/// WSL session reports a Linux kernel and must inherit the Linux binary
/// target.
pub fn probe(signals: &SystemSignals) -> PlatformInfo {
    let os_family = detect_os_family(signals);
    let arch = map_arch(&signals.machine);
    let package_manager = match os_family {
        OsFamily::Darwin => SystemPackageManager::Brew,
        OsFamily::Linux | OsFamily::Wsl => linux_package_manager(signals),
        OsFamily::Windows | OsFamily::Unsupported => SystemPackageManager::None,
    };

    let platform = PlatformInfo {
        os_family,
        arch,
        package_manager,
    };
    tracing::debug!(
        os = %platform.os_family,
        arch = %platform.arch,
        pm = ?platform.package_manager,
        "platform probed"
    );
    platform
}

fn detect_os_family(signals: &SystemSignals) -> OsFamily {
    if is_wsl(signals) {
        return OsFamily::Wsl;
    }
    if is_native_windows(signals) {
        return OsFamily::Windows;
    }
    match signals.kernel_name.as_str() {
        "Darwin" => OsFamily::Darwin,
        "Linux" => OsFamily::Linux,
        _ => OsFamily::Unsupported,
    }
}

/// WSL kernels carry a "microsoft" marker in the release string
/// (e.g. "5.15.167.4-microsoft-standard-WSL2").
fn is_wsl(signals: &SystemSignals) -> bool {
    signals.kernel_name == "Linux"
        && signals.kernel_release.to_lowercase().contains("microsoft")
}

/// Native Windows shows up either through the `OS` environment marker or
/// through MSYS/MinGW/Cygwin kernel names in a POSIX-emulation shell.
fn is_native_windows(signals: &SystemSignals) -> bool {
    if signals.windows_env && signals.kernel_name != "Linux" {
        return true;
    }
    let kernel = signals.kernel_name.to_uppercase();
    kernel.starts_with("MINGW") || kernel.starts_with("MSYS") || kernel.starts_with("CYGWIN")
}

/// Distro marker files, in fixed priority order.
fn linux_package_manager(signals: &SystemSignals) -> SystemPackageManager {
    if signals.debian_marker {
        SystemPackageManager::Apt
    } else if signals.fedora_marker {
        SystemPackageManager::Dnf
    } else if signals.arch_marker {
        SystemPackageManager::Pacman
    } else {
        SystemPackageManager::None
    }
}

/// Fixed machine-string lookup table. Unlisted values are unsupported.
fn map_arch(machine: &str) -> Arch {
    match machine {
        "x86_64" => Arch::Amd64,
        "aarch64" | "arm64" => Arch::Arm64,
        "armv7l" => Arch::Armv7,
        "ppc64le" => Arch::Ppc64le,
        "s390x" => Arch::S390x,
        _ => Arch::Unsupported,
    }
}
