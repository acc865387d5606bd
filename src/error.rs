//! Error types for pocketstack operations.
//!
//! This module defines [`PocketstackError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Every error is terminal for the run: the tool fails fast rather than
//!   leaving a half-configured project behind
//! - Errors that have a known fix carry it in `remediation()` so the shell
//!   can print an actionable next step before exiting non-zero
//! - Use `anyhow::Error` (via `PocketstackError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pocketstack operations.
#[derive(Debug, Error)]
pub enum PocketstackError {
    /// The user cancelled an interactive prompt.
    #[error("Setup cancelled")]
    Cancelled,

    /// The host OS family or architecture cannot run a PocketBase binary.
    #[error("Unsupported platform: {os}/{arch}")]
    UnsupportedPlatform {
        os: String,
        arch: String,
        remediation: Option<String>,
    },

    /// A hard requirement is not installed and cannot be worked around.
    #[error("Missing required tool: {tool}")]
    MissingHardDependency { tool: String, remediation: String },

    /// A tool's self-reported version could not be verified.
    #[error("Version check failed for {tool}: {detail}")]
    VersionCheckFailed { tool: String, detail: String },

    /// The network was unreachable or timed out.
    #[error("Network unreachable: {url}")]
    NetworkUnavailable { url: String },

    /// The release asset URL returned an HTTP error status.
    #[error("Release asset not found: {url}")]
    AssetNotFound { url: String },

    /// A filesystem operation failed.
    #[error("Failed to {op} {path}")]
    Filesystem {
        path: PathBuf,
        op: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// An external tool invocation exited unsuccessfully.
    #[error("{tool} {op} failed: {detail}")]
    ExternalTool {
        tool: String,
        op: String,
        detail: String,
    },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PocketstackError {
    /// The suggested fix to print before exiting, when one is known.
    pub fn remediation(&self) -> Option<&str> {
        match self {
            Self::UnsupportedPlatform { remediation, .. } => remediation.as_deref(),
            Self::MissingHardDependency { remediation, .. } => Some(remediation),
            Self::AssetNotFound { .. } => Some(
                "The release naming scheme may have changed upstream; \
                 check https://github.com/pocketbase/pocketbase/releases",
            ),
            Self::NetworkUnavailable { .. } => {
                Some("Check your internet connection and try again")
            }
            _ => None,
        }
    }
}

/// Result type alias for pocketstack operations.
pub type Result<T> = std::result::Result<T, PocketstackError>;
