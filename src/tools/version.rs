//! Version extraction and comparison.
//!
//! Tools self-report versions in loose formats ("v22.1.0",
//! "git version 2.43.0", "UnZip 6.00 ..."). The extractor pulls the first
//! dotted numeric run out of the string and compares it as a tuple of
//! integers, not as text, so "10" sorts after "9".

use std::sync::OnceLock;

use regex::Regex;

/// A parsed numeric version. Ordered lexicographically by component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ToolVersion {
    pub major: u32,
    pub minor: u32,
    pub patch: u32,
}

impl ToolVersion {
    pub fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }
}

fn version_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"v?(\d+)(?:\.(\d+))?(?:\.(\d+))?").expect("valid version pattern")
    })
}

/// Extract the leading numeric version from a tool's self-reported string.
///
/// Returns `None` when no numeric component is present at all.
pub fn extract_version(output: &str) -> Option<ToolVersion> {
    let caps = version_pattern().captures(output)?;
    let component = |idx: usize| {
        caps.get(idx)
            .and_then(|m| m.as_str().parse::<u32>().ok())
            .unwrap_or(0)
    };
    Some(ToolVersion::new(component(1), component(2), component(3)))
}

/// Whether a self-reported version string satisfies a minimum major.
///
/// Fail-closed: a malformed or unparseable string does NOT meet the
/// minimum.
pub fn meets_minimum(output: &str, min_major: u32) -> bool {
    match extract_version(output) {
        Some(version) => version >= ToolVersion::new(min_major, 0, 0),
        None => false,
    }
}
