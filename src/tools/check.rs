//! The order-preserving tool availability check.

use std::path::PathBuf;
use std::process::Command;

use super::lookup::{find_on_path, search_path};
use super::requirement::ToolRequirement;
use super::version::meets_minimum;

/// The result of checking a single tool. Never mutated after creation.
#[derive(Debug, Clone)]
pub struct ToolStatus {
    pub name: String,
    pub found: bool,
    /// First line of the tool's self-reported version output, when probed.
    pub version: Option<String>,
    /// `Some` only for tools with a minimum version requirement.
    pub meets_minimum: Option<bool>,
}

impl ToolStatus {
    /// Whether this tool needs no remediation.
    pub fn satisfies(&self) -> bool {
        self.found && self.meets_minimum.unwrap_or(true)
    }
}

/// Check all requirements against the real system.
///
/// Output order matches input order; each probe is independent, so a
/// missing tool never hides the status of the ones after it.
pub fn check(requirements: &[ToolRequirement]) -> Vec<ToolStatus> {
    let path_entries = search_path();
    check_with(
        requirements,
        |tool| find_on_path(tool, &path_entries),
        probe_version,
    )
}

/// Check requirements with injected lookup and version probes.
///
/// This is the testable core: the closures stand in for PATH resolution
/// and subprocess invocation.
pub fn check_with<L, V>(requirements: &[ToolRequirement], locate: L, version_of: V) -> Vec<ToolStatus>
where
    L: Fn(&str) -> Option<PathBuf>,
    V: Fn(&str) -> Option<String>,
{
    requirements
        .iter()
        .map(|req| {
            let found = locate(req.name).is_some();
            let version = if found {
                version_of(req.name)
            } else {
                None
            };
            // Fail-closed: a minimum with no parseable version is unmet
            let meets = req.min_major.map(|min| {
                found
                    && version
                        .as_deref()
                        .map(|v| meets_minimum(v, min))
                        .unwrap_or(false)
            });
            let status = ToolStatus {
                name: req.name.to_string(),
                found,
                version,
                meets_minimum: meets,
            };
            tracing::debug!(
                tool = %status.name,
                found = status.found,
                version = ?status.version,
                "tool checked"
            );
            status
        })
        .collect()
}

/// Ask a tool for its version, returning the first line of output.
fn probe_version(tool: &str) -> Option<String> {
    let output = Command::new(tool).arg("--version").output().ok()?;
    if !output.status.success() {
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    stdout
        .lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
}

/// The external download executable, in preference order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferTool {
    Curl,
    Wget,
}

impl TransferTool {
    /// Executable name on the search path.
    pub fn command(&self) -> &'static str {
        match self {
            TransferTool::Curl => "curl",
            TransferTool::Wget => "wget",
        }
    }
}

/// First-match-wins selection over [curl, wget].
///
/// Returns `None` when neither is present, which the planner treats as a
/// hard failure.
pub fn select_transfer_tool() -> Option<TransferTool> {
    let path_entries = search_path();
    select_transfer_tool_with(|tool| find_on_path(tool, &path_entries))
}

/// Transfer-tool selection with an injected lookup.
pub fn select_transfer_tool_with<L>(locate: L) -> Option<TransferTool>
where
    L: Fn(&str) -> Option<PathBuf>,
{
    [TransferTool::Curl, TransferTool::Wget]
        .into_iter()
        .find(|tool| locate(tool.command()).is_some())
}
