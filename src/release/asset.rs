//! Release asset naming.

use crate::error::{PocketstackError, Result};
use crate::platform::{Arch, OsFamily};

/// The pinned PocketBase version used when the resolver yields nothing or
/// the user declines "latest".
pub const SUPPORTED_VERSION: &str = "0.24.1";

/// Base URL for release downloads; assets live under `v{version}/`.
const DOWNLOAD_BASE: &str = "https://github.com/pocketbase/pocketbase/releases/download";

/// A named downloadable artifact for a specific version and platform.
///
/// Derived value: recomputed whenever version or platform changes, no
/// identity of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReleaseAsset {
    pub version: String,
    pub file_name: String,
    pub download_url: String,
}

/// Build the expected release asset for a version and platform.
///
/// Deterministic and pure. WSL maps to the `linux` asset since it runs
/// Linux binaries. Unsupported or Windows inputs are rejected rather than
/// assembled into a URL that can only 404.
pub fn build_asset(version: &str, os_family: OsFamily, arch: Arch) -> Result<ReleaseAsset> {
    let os = match os_family {
        OsFamily::Darwin => "darwin",
        OsFamily::Linux | OsFamily::Wsl => "linux",
        OsFamily::Windows | OsFamily::Unsupported => {
            return Err(unsupported(os_family, arch));
        }
    };
    let arch_name = match arch {
        Arch::Unsupported => return Err(unsupported(os_family, arch)),
        supported => supported.to_string(),
    };

    let file_name = format!("pocketbase_{version}_{os}_{arch_name}.zip");
    let download_url = format!("{DOWNLOAD_BASE}/v{version}/{file_name}");

    Ok(ReleaseAsset {
        version: version.to_string(),
        file_name,
        download_url,
    })
}

fn unsupported(os_family: OsFamily, arch: Arch) -> PocketstackError {
    PocketstackError::UnsupportedPlatform {
        os: os_family.to_string(),
        arch: arch.to_string(),
        remediation: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linux_amd64_asset_name() {
        let asset = build_asset("0.24.1", OsFamily::Linux, Arch::Amd64).unwrap();
        assert_eq!(asset.file_name, "pocketbase_0.24.1_linux_amd64.zip");
        assert_eq!(
            asset.download_url,
            "https://github.com/pocketbase/pocketbase/releases/download/v0.24.1/pocketbase_0.24.1_linux_amd64.zip"
        );
        assert_eq!(asset.version, "0.24.1");
    }

    #[test]
    fn darwin_arm64_asset_name() {
        let asset = build_asset("0.25.0", OsFamily::Darwin, Arch::Arm64).unwrap();
        assert_eq!(asset.file_name, "pocketbase_0.25.0_darwin_arm64.zip");
    }

    #[test]
    fn wsl_receives_the_linux_asset() {
        let asset = build_asset("0.24.1", OsFamily::Wsl, Arch::Amd64).unwrap();
        assert_eq!(asset.file_name, "pocketbase_0.24.1_linux_amd64.zip");
    }

    #[test]
    fn build_is_deterministic() {
        let first = build_asset("0.24.1", OsFamily::Linux, Arch::Armv7).unwrap();
        let second = build_asset("0.24.1", OsFamily::Linux, Arch::Armv7).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unsupported_os_is_rejected() {
        assert!(build_asset("0.24.1", OsFamily::Unsupported, Arch::Amd64).is_err());
        assert!(build_asset("0.24.1", OsFamily::Windows, Arch::Amd64).is_err());
    }

    #[test]
    fn unsupported_arch_is_rejected() {
        let err = build_asset("0.24.1", OsFamily::Linux, Arch::Unsupported).unwrap_err();
        assert!(matches!(
            err,
            PocketstackError::UnsupportedPlatform { .. }
        ));
    }

    #[test]
    fn every_supported_pair_builds() {
        let oses = [OsFamily::Darwin, OsFamily::Linux, OsFamily::Wsl];
        let arches = [
            Arch::Amd64,
            Arch::Arm64,
            Arch::Armv7,
            Arch::Ppc64le,
            Arch::S390x,
        ];
        for os in oses {
            for arch in arches {
                assert!(build_asset("0.24.1", os, arch).is_ok(), "{os}/{arch}");
            }
        }
    }
}
