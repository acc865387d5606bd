//! Archive extraction via the external `unzip` tool.

use std::path::Path;
use std::process::Command;

use crate::error::{PocketstackError, Result};

/// Extract `archive` into `dest`, overwriting existing files.
pub fn extract(archive: &Path, dest: &Path) -> Result<()> {
    std::fs::create_dir_all(dest).map_err(|source| PocketstackError::Filesystem {
        path: dest.to_path_buf(),
        op: "create",
        source,
    })?;

    let output = Command::new("unzip")
        .arg("-o")
        .arg(archive)
        .arg("-d")
        .arg(dest)
        .output()?;

    if !output.status.success() {
        return Err(PocketstackError::ExternalTool {
            tool: "unzip".to_string(),
            op: "extract".to_string(),
            detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        });
    }

    Ok(())
}
