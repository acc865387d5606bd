//! Frontend dependency installation.

use std::path::Path;
use std::process::Command;

use crate::error::{PocketstackError, Result};

/// Run `npm install` in the frontend directory.
///
/// Output is captured, not streamed; the spinner is the only progress
/// indication. On failure the tail of stderr is surfaced so the user sees
/// the actual npm error, not just an exit code.
pub fn install_dependencies(frontend_dir: &Path) -> Result<()> {
    let output = Command::new("npm")
        .arg("install")
        .current_dir(frontend_dir)
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        let tail: Vec<&str> = stderr.lines().rev().take(5).collect();
        let detail: Vec<&str> = tail.into_iter().rev().collect();
        return Err(PocketstackError::ExternalTool {
            tool: "npm".to_string(),
            op: "install".to_string(),
            detail: detail.join("\n"),
        });
    }

    Ok(())
}
