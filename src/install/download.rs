//! Release asset download via the selected transfer tool.

use std::path::Path;
use std::process::Command;

use crate::error::{PocketstackError, Result};
use crate::tools::TransferTool;

/// Download `url` into `dest` using an external transfer tool.
///
/// The tool's exit code is mapped onto the error taxonomy so that an HTTP
/// error status (most likely upstream naming-scheme drift producing a 404)
/// surfaces as [`PocketstackError::AssetNotFound`], distinct from
/// [`PocketstackError::NetworkUnavailable`].
pub fn download(tool: TransferTool, url: &str, dest: &Path) -> Result<()> {
    let output = match tool {
        TransferTool::Curl => Command::new("curl")
            .args(["-fSL", "--output"])
            .arg(dest)
            .arg(url)
            .output()?,
        TransferTool::Wget => Command::new("wget")
            .arg("-q")
            .arg("-O")
            .arg(dest)
            .arg(url)
            .output()?,
    };

    if output.status.success() {
        return Ok(());
    }

    // wget leaves a zero-length file behind on failure
    if dest.exists() {
        let _ = std::fs::remove_file(dest);
    }

    Err(classify_failure(
        tool,
        output.status.code(),
        url,
        &String::from_utf8_lossy(&output.stderr),
    ))
}

/// Map a transfer tool's exit code onto the error taxonomy.
///
/// curl: 22 = HTTP error with `--fail`, 6/7 = resolve/connect failure,
/// 28 = timeout. wget: 8 = server error response, 4 = network failure.
fn classify_failure(
    tool: TransferTool,
    code: Option<i32>,
    url: &str,
    stderr: &str,
) -> PocketstackError {
    match (tool, code) {
        (TransferTool::Curl, Some(22)) | (TransferTool::Wget, Some(8)) => {
            PocketstackError::AssetNotFound {
                url: url.to_string(),
            }
        }
        (TransferTool::Curl, Some(6 | 7 | 28)) | (TransferTool::Wget, Some(4)) => {
            PocketstackError::NetworkUnavailable {
                url: url.to_string(),
            }
        }
        _ => PocketstackError::ExternalTool {
            tool: tool.command().to_string(),
            op: "download".to_string(),
            detail: if stderr.trim().is_empty() {
                format!("exit code {:?}", code)
            } else {
                stderr.trim().to_string()
            },
        },
    }
}
