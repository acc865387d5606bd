//! The fixed tool requirement list.

/// Minimum Node.js major version the frontend toolchain supports.
pub const NODE_MIN_MAJOR: u32 = 22;

/// How the absence of a tool is handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Absence unconditionally aborts the run.
    Hard,
    /// Absence triggers one offered remediation before aborting.
    Soft,
}

/// A single external tool the installer depends on.
#[derive(Debug, Clone, Copy)]
pub struct ToolRequirement {
    /// Executable name, also the package name in remediation commands.
    pub name: &'static str,
    pub severity: Severity,
    /// Minimum major version, checked against the tool's self-reported
    /// version string. Only the runtime carries one.
    pub min_major: Option<u32>,
}

/// The requirements checked on every run, in reporting order.
///
/// The transfer tool (curl/wget) is selected separately because either
/// one satisfies the requirement; see
/// [`select_transfer_tool`](super::check::select_transfer_tool).
pub fn required_tools() -> &'static [ToolRequirement] {
    const TOOLS: &[ToolRequirement] = &[
        ToolRequirement {
            name: "git",
            severity: Severity::Hard,
            min_major: None,
        },
        ToolRequirement {
            name: "unzip",
            severity: Severity::Hard,
            min_major: None,
        },
        ToolRequirement {
            name: "node",
            severity: Severity::Soft,
            min_major: Some(NODE_MIN_MAJOR),
        },
    ];
    TOOLS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hard_requirements_come_before_soft() {
        let tools = required_tools();
        let first_soft = tools
            .iter()
            .position(|t| t.severity == Severity::Soft)
            .unwrap();
        assert!(tools[..first_soft]
            .iter()
            .all(|t| t.severity == Severity::Hard));
    }

    #[test]
    fn only_the_runtime_has_a_minimum_version() {
        for tool in required_tools() {
            if tool.name == "node" {
                assert_eq!(tool.min_major, Some(NODE_MIN_MAJOR));
            } else {
                assert!(tool.min_major.is_none(), "{} has a minimum", tool.name);
            }
        }
    }

    #[test]
    fn git_and_unzip_are_hard() {
        let tools = required_tools();
        for name in ["git", "unzip"] {
            let req = tools.iter().find(|t| t.name == name).unwrap();
            assert_eq!(req.severity, Severity::Hard);
        }
    }
}
