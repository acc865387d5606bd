//! External tool availability checking.
//!
//! The planner needs to know, before anything is downloaded or cloned,
//! which of the required executables exist on the search path and whether
//! the runtime is new enough. This module provides:
//!
//! - [`requirement`] - the fixed requirement list (hard vs soft)
//! - [`lookup`] - PATH-based executable resolution
//! - [`version`] - version extraction and the parsed comparator
//! - [`check`] - the order-preserving availability check
//! - [`remediation`] - package-manager-specific install commands

pub mod check;
pub mod lookup;
pub mod remediation;
pub mod requirement;
pub mod version;

pub use check::{check, select_transfer_tool, ToolStatus, TransferTool};
pub use remediation::install_command;
pub use requirement::{required_tools, Severity, ToolRequirement, NODE_MIN_MAJOR};
