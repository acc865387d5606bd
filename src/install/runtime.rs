//! Runtime remediation: nvm plus the latest LTS Node.
//!
//! The one soft requirement. When Node is missing or too old, the shell
//! offers this flow exactly once before the gap becomes hard. Both steps
//! run with inherited stdio because the nvm installer and `nvm install`
//! are interactive by design; pocketstack delegates rather than wrapping.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::error::{PocketstackError, Result};
use crate::tools::version::extract_version;
use crate::tools::TransferTool;

/// Pinned nvm installer script. Piped through bash, as upstream documents.
const NVM_INSTALL_URL: &str =
    "https://raw.githubusercontent.com/nvm-sh/nvm/v0.40.1/install.sh";

/// Install nvm, then the latest LTS Node, through the user's bash.
///
/// `nvm` is a shell function, not a binary, so the LTS install sources
/// nvm.sh inside the spawned shell rather than looking anything up on
/// PATH.
pub fn install_latest_lts(transfer: TransferTool) -> Result<()> {
    let fetch = match transfer {
        TransferTool::Curl => format!("curl -o- {NVM_INSTALL_URL}"),
        TransferTool::Wget => format!("wget -qO- {NVM_INSTALL_URL}"),
    };

    run_delegated("nvm", "install", &format!("{fetch} | bash"))?;
    run_delegated(
        "nvm",
        "install --lts",
        r#"export NVM_DIR="$HOME/.nvm" && [ -s "$NVM_DIR/nvm.sh" ] && . "$NVM_DIR/nvm.sh" && nvm install --lts"#,
    )
}

fn run_delegated(tool: &str, op: &str, script: &str) -> Result<()> {
    let status = Command::new("bash").arg("-c").arg(script).status()?;
    if !status.success() {
        return Err(PocketstackError::ExternalTool {
            tool: tool.to_string(),
            op: op.to_string(),
            detail: format!("exit code {:?}", status.code()),
        });
    }
    Ok(())
}

/// Locate the bin directory of the newest nvm-managed Node install.
///
/// nvm only activates in new login shells; this process must find the
/// fresh binary itself for the re-check and the later `npm install`.
pub fn nvm_node_bin_dir() -> Option<PathBuf> {
    let home = std::env::var_os("HOME")?;
    let versions = PathBuf::from(home).join(".nvm/versions/node");
    let mut installed: Vec<PathBuf> = std::fs::read_dir(&versions)
        .ok()?
        .flatten()
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    installed.sort_by_key(|path| {
        path.file_name()
            .and_then(|name| name.to_str())
            .and_then(extract_version)
    });
    installed
        .last()
        .map(|dir| dir.join("bin"))
        .filter(|bin| bin.is_dir())
}

/// Prepend a directory to this process's PATH so re-checks and child
/// processes see a freshly installed runtime.
pub fn prepend_path(dir: &Path) {
    let current = std::env::var("PATH").unwrap_or_default();
    let new_path = format!("{}:{}", dir.display(), current);
    std::env::set_var("PATH", new_path);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delegated_failure_maps_to_external_tool() {
        let err = run_delegated("nvm", "install", "exit 3").unwrap_err();
        match err {
            PocketstackError::ExternalTool { tool, op, detail } => {
                assert_eq!(tool, "nvm");
                assert_eq!(op, "install");
                assert!(detail.contains("3"));
            }
            other => panic!("expected ExternalTool, got {other:?}"),
        }
    }

    #[test]
    fn delegated_success_is_ok() {
        assert!(run_delegated("nvm", "install", "true").is_ok());
    }

    #[test]
    fn newest_node_version_wins_numerically() {
        // v10 must beat v9 despite sorting after it textually
        let temp = tempfile::TempDir::new().unwrap();
        let versions = temp.path().join(".nvm/versions/node");
        for version in ["v9.11.2", "v10.24.1"] {
            std::fs::create_dir_all(versions.join(version).join("bin")).unwrap();
        }

        let mut dirs: Vec<PathBuf> = std::fs::read_dir(&versions)
            .unwrap()
            .flatten()
            .map(|entry| entry.path())
            .collect();
        dirs.sort_by_key(|path| {
            path.file_name()
                .and_then(|name| name.to_str())
                .and_then(extract_version)
        });
        assert!(dirs.last().unwrap().ends_with("v10.24.1"));
    }

    #[test]
    fn nvm_bin_dir_absent_when_no_install() {
        // With HOME untouched this either finds a real install or none;
        // the call must not panic either way.
        let _ = nvm_node_bin_dir();
    }
}
