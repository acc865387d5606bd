//! Install planning.
//!
//! The planner composes the probed platform, the tool statuses, and the
//! version choice into a single [`InstallPlan`] consumed by the execution
//! layer. Planning is a fixed forward sequence:
//!
//! `Init → PlatformChecked → ToolsChecked → VersionResolved → AssetBuilt → Ready`
//!
//! with `Failed` reachable from any transition. `Ready` is the only state
//! that feeds execution. An unsupported platform aborts planning outright
//! so no plan object (and therefore no asset) ever exists for it.

use std::collections::{BTreeMap, BTreeSet};

use crate::error::{PocketstackError, Result};
use crate::platform::{OsFamily, PlatformInfo, WSL_REMEDIATION};
use crate::release::asset::build_asset;
use crate::release::{ReleaseAsset, SUPPORTED_VERSION};
use crate::tools::requirement::required_tools;
use crate::tools::{install_command, ToolStatus, TransferTool};

/// Which PocketBase version the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionChoice {
    /// Use the resolver output, falling back to the pinned version when
    /// the release index was unreachable.
    Latest,
    /// Use the pinned supported version.
    Pinned,
}

/// Planner sequencing states, in transition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlanState {
    Init,
    PlatformChecked,
    ToolsChecked,
    VersionResolved,
    AssetBuilt,
    Ready,
    Failed,
}

/// The terminal decision object. Built once, consumed by the execution
/// layer, then discarded.
#[derive(Debug, Clone)]
pub struct InstallPlan {
    pub platform: PlatformInfo,
    /// Statuses in requirement order, exactly as checked.
    pub tools: Vec<ToolStatus>,
    /// Names of unmet hard requirements. Non-empty iff the plan is
    /// non-executable.
    pub missing_hard: BTreeSet<String>,
    /// Suggested fix per unmet requirement.
    pub remediation: BTreeMap<String, String>,
    /// The selected download tool, when one was found.
    pub transfer_tool: Option<TransferTool>,
    /// The asset to download. `None` whenever the plan is non-executable.
    pub asset: Option<ReleaseAsset>,
}

impl InstallPlan {
    /// Whether the execution layer can run this plan.
    pub fn is_executable(&self) -> bool {
        self.missing_hard.is_empty()
    }

    /// The asset of an executable plan, or the first unmet hard
    /// requirement in requirement order.
    pub fn ensure_ready(&self) -> Result<&ReleaseAsset> {
        for status in &self.tools {
            if self.missing_hard.contains(&status.name) {
                return Err(self.missing_error(&status.name));
            }
        }
        // Remaining entries are outside the requirement list (transfer tool)
        if let Some(name) = self.missing_hard.iter().next() {
            return Err(self.missing_error(name));
        }
        self.asset.as_ref().ok_or_else(|| {
            PocketstackError::Other(anyhow::anyhow!("executable plan without an asset"))
        })
    }

    fn missing_error(&self, tool: &str) -> PocketstackError {
        PocketstackError::MissingHardDependency {
            tool: tool.to_string(),
            remediation: self
                .remediation
                .get(tool)
                .cloned()
                .unwrap_or_else(|| format!("Install '{tool}' and re-run pocketstack")),
        }
    }
}

/// Compose a plan from the probed platform, the checked tools, and the
/// user's version choice.
///
/// `tools` must come from checking [`required_tools`] (order preserved);
/// `resolved_latest` is the resolver output, consulted only for
/// [`VersionChoice::Latest`]. Soft requirements have already had their one
/// interactive remediation by the time this runs, so anything still unmet
/// is treated as hard.
pub fn plan(
    platform: PlatformInfo,
    tools: Vec<ToolStatus>,
    transfer_tool: Option<TransferTool>,
    version_choice: VersionChoice,
    resolved_latest: Option<String>,
) -> Result<InstallPlan> {
    let mut state = PlanState::Init;

    if !platform.is_supported() {
        transition(&mut state, PlanState::Failed);
        let remediation = match platform.os_family {
            OsFamily::Windows => Some(WSL_REMEDIATION.to_string()),
            _ => None,
        };
        return Err(PocketstackError::UnsupportedPlatform {
            os: platform.os_family.to_string(),
            arch: platform.arch.to_string(),
            remediation,
        });
    }
    transition(&mut state, PlanState::PlatformChecked);

    let mut missing_hard = BTreeSet::new();
    let mut remediation = BTreeMap::new();
    for (requirement, status) in required_tools().iter().zip(&tools) {
        if status.satisfies() {
            continue;
        }
        missing_hard.insert(status.name.clone());
        let fix = if requirement.name == "node" {
            format!(
                "Install Node.js {}+ (e.g. 'nvm install --lts') and re-run pocketstack",
                requirement.min_major.unwrap_or_default()
            )
        } else {
            install_command(platform.package_manager, requirement.name)
        };
        remediation.insert(status.name.clone(), fix);
    }
    if transfer_tool.is_none() {
        missing_hard.insert("curl".to_string());
        remediation.insert(
            "curl".to_string(),
            install_command(platform.package_manager, "curl"),
        );
    }

    if !missing_hard.is_empty() {
        transition(&mut state, PlanState::Failed);
        return Ok(InstallPlan {
            platform,
            tools,
            missing_hard,
            remediation,
            transfer_tool,
            asset: None,
        });
    }
    transition(&mut state, PlanState::ToolsChecked);

    let version = match (version_choice, resolved_latest) {
        (VersionChoice::Latest, Some(resolved)) => resolved,
        _ => SUPPORTED_VERSION.to_string(),
    };
    transition(&mut state, PlanState::VersionResolved);

    let asset = build_asset(&version, platform.os_family, platform.arch)?;
    transition(&mut state, PlanState::AssetBuilt);
    transition(&mut state, PlanState::Ready);

    Ok(InstallPlan {
        platform,
        tools,
        missing_hard,
        remediation,
        transfer_tool,
        asset: Some(asset),
    })
}

fn transition(state: &mut PlanState, next: PlanState) {
    tracing::debug!(from = ?state, to = ?next, "plan transition");
    *state = next;
}
