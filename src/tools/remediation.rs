//! Package-manager-specific remediation commands.
//!
//! The tool never runs these itself; they are printed for the user to
//! copy, keeping privileged installs in the user's hands.

use crate::platform::SystemPackageManager;

/// Build the install command suggested for a missing package.
///
/// An unrecognized distribution (`SystemPackageManager::None`) yields a
/// generic manual-install message instead of an empty suggestion.
pub fn install_command(package_manager: SystemPackageManager, package: &str) -> String {
    match package_manager {
        SystemPackageManager::Apt => format!("sudo apt install {package}"),
        SystemPackageManager::Dnf => format!("sudo dnf install {package}"),
        SystemPackageManager::Pacman => format!("sudo pacman -S {package}"),
        SystemPackageManager::Brew => format!("brew install {package}"),
        SystemPackageManager::None => {
            format!("Install '{package}' with your distribution's package manager")
        }
    }
}
