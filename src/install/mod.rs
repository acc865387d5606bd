//! Execution layer: turning a Ready plan into a project directory.
//!
//! Strictly sequential I/O plumbing around the plan: clone the template,
//! fetch and unpack the backend binary, install frontend dependencies.
//! Every step blocks the calling thread; there is no partial-success
//! continuation — the first failure ends the run.

pub mod download;
pub mod extract;
pub mod frontend;
pub mod runtime;
pub mod template;

pub use template::{TemplateCloner, TEMPLATE_REPO_URL};

use std::path::Path;

use crate::error::{PocketstackError, Result};
use crate::planner::InstallPlan;
use crate::ui::{SpinnerHandle, UserInterface};

/// Frontend subdirectory of the created project.
pub const FRONTEND_DIR: &str = "frontend";
/// Backend subdirectory holding the PocketBase binary.
pub const POCKETBASE_DIR: &str = "pocketbase";

/// Execute a Ready plan into `target`.
///
/// The caller has already confirmed any destructive removal of an
/// existing `target`; this function assumes the path is free.
pub fn execute(plan: &InstallPlan, target: &Path, ui: &mut dyn UserInterface) -> Result<()> {
    let asset = plan.ensure_ready()?.clone();
    let transfer = plan.transfer_tool.ok_or_else(|| {
        PocketstackError::Other(anyhow::anyhow!("executable plan without a transfer tool"))
    })?;

    step(ui, "Cloning project template...", "Template cloned", || {
        TemplateCloner::new().clone_to(target)
    })?;

    let backend_dir = target.join(POCKETBASE_DIR);
    let archive = backend_dir.join(&asset.file_name);
    step(
        ui,
        &format!("Downloading PocketBase {}...", asset.version),
        &format!("PocketBase {} downloaded", asset.version),
        || {
            std::fs::create_dir_all(&backend_dir).map_err(|source| {
                PocketstackError::Filesystem {
                    path: backend_dir.clone(),
                    op: "create",
                    source,
                }
            })?;
            download::download(transfer, &asset.download_url, &archive)
        },
    )?;

    step(ui, "Unpacking PocketBase...", "PocketBase unpacked", || {
        extract::extract(&archive, &backend_dir)?;
        std::fs::remove_file(&archive).map_err(|source| PocketstackError::Filesystem {
            path: archive.clone(),
            op: "remove",
            source,
        })
    })?;

    let frontend_dir = target.join(FRONTEND_DIR);
    if frontend_dir.is_dir() {
        step(
            ui,
            "Installing frontend dependencies...",
            "Frontend dependencies installed",
            || frontend::install_dependencies(&frontend_dir),
        )?;
    } else {
        ui.warning("Template has no frontend directory; skipping npm install");
    }

    Ok(())
}

/// Run one install step under a spinner, finishing it to match the result.
fn step<T>(
    ui: &mut dyn UserInterface,
    running: &str,
    done: &str,
    op: impl FnOnce() -> Result<T>,
) -> Result<T> {
    let mut spinner = ui.start_spinner(running);
    match op() {
        Ok(value) => {
            spinner.finish_success(done);
            Ok(value)
        }
        Err(err) => {
            spinner.finish_error(&err.to_string());
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::{Arch, OsFamily, PlatformInfo, SystemPackageManager};
    use crate::ui::MockUI;
    use std::collections::{BTreeMap, BTreeSet};
    use tempfile::TempDir;

    fn unexecutable_plan() -> InstallPlan {
        let mut missing_hard = BTreeSet::new();
        missing_hard.insert("unzip".to_string());
        let mut remediation = BTreeMap::new();
        remediation.insert("unzip".to_string(), "sudo apt install unzip".to_string());
        InstallPlan {
            platform: PlatformInfo {
                os_family: OsFamily::Linux,
                arch: Arch::Amd64,
                package_manager: SystemPackageManager::Apt,
            },
            tools: vec![],
            missing_hard,
            remediation,
            transfer_tool: None,
            asset: None,
        }
    }

    #[test]
    fn execute_refuses_a_non_executable_plan() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();
        let err = execute(&unexecutable_plan(), &temp.path().join("proj"), &mut ui).unwrap_err();
        assert!(matches!(
            err,
            PocketstackError::MissingHardDependency { .. }
        ));
        // Nothing was attempted
        assert!(ui.spinners().is_empty());
    }

    #[test]
    fn step_reports_success_through_the_spinner() {
        let mut ui = MockUI::new();
        let result = step(&mut ui, "working...", "worked", || Ok(42));
        assert_eq!(result.unwrap(), 42);
        assert_eq!(ui.spinners(), &["working...".to_string()]);
    }

    #[test]
    fn step_propagates_the_error() {
        let mut ui = MockUI::new();
        let result: Result<()> = step(&mut ui, "working...", "worked", || {
            Err(PocketstackError::Cancelled)
        });
        assert!(matches!(result, Err(PocketstackError::Cancelled)));
    }
}
