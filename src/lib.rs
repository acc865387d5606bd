//! Pocketstack - interactive bootstrapper for PocketBase-backed web projects.
//!
//! Pocketstack detects the host platform, verifies prerequisite tools,
//! resolves the PocketBase release to install, clones a web-application
//! template, fetches and unpacks the platform-specific backend binary, and
//! installs frontend dependencies.
//!
//! # Modules
//!
//! - [`cli`] - Argument parsing and the interactive setup flow
//! - [`error`] - Error types and result aliases
//! - [`install`] - Execution layer: clone, download, extract, npm install
//! - [`planner`] - Composition of probes and checks into an install plan
//! - [`platform`] - OS/architecture/package-manager detection
//! - [`release`] - Release version resolution and asset naming
//! - [`tools`] - External tool availability checking
//! - [`ui`] - Interactive prompts, spinners, and terminal output
//!
//! # Example
//!
//! ```
//! use pocketstack::platform::{probe, SystemSignals};
//!
//! // The probe is a pure function over captured signals
//! let signals = SystemSignals {
//!     kernel_name: "Linux".to_string(),
//!     kernel_release: "6.8.0-41-generic".to_string(),
//!     machine: "x86_64".to_string(),
//!     debian_marker: true,
//!     ..Default::default()
//! };
//! let platform = probe(&signals);
//! assert!(platform.is_supported());
//! ```

pub mod cli;
pub mod error;
pub mod install;
pub mod planner;
pub mod platform;
pub mod release;
pub mod tools;
pub mod ui;

pub use error::{PocketstackError, Result};
