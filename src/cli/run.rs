//! The interactive setup flow.
//!
//! Sequencing lives here; decisions live in the pure components
//! (platform, tools, release, planner). Every answer flows in through the
//! [`UserInterface`] trait, so the whole flow runs against scripted
//! inputs in tests.

use std::path::PathBuf;

use crate::error::{PocketstackError, Result};
use crate::install;
use crate::install::runtime;
use crate::install::TemplateCloner;
use crate::planner::{self, VersionChoice};
use crate::platform::{probe, OsFamily, SystemSignals, WSL_REMEDIATION};
use crate::release::{ReleaseClient, SUPPORTED_VERSION};
use crate::tools::{self, required_tools, ToolStatus, NODE_MIN_MAJOR};
use crate::ui::{Prompt, PromptOption, SpinnerHandle, UserInterface};

/// Run the complete interactive setup.
pub fn run(ui: &mut dyn UserInterface) -> Result<()> {
    ui.show_header(&format!("pocketstack v{}", env!("CARGO_PKG_VERSION")));

    if crate::platform::signals::is_elevated() {
        ui.warning("Running as root; the created project will be root-owned");
    }

    // Platform gate. Native Windows short-circuits with its own fix.
    let signals = SystemSignals::capture();
    let platform = probe(&signals);
    if !platform.is_supported() {
        let remediation = matches!(platform.os_family, OsFamily::Windows)
            .then(|| WSL_REMEDIATION.to_string());
        return Err(PocketstackError::UnsupportedPlatform {
            os: platform.os_family.to_string(),
            arch: platform.arch.to_string(),
            remediation,
        });
    }
    ui.success(&format!(
        "Detected {} on {}",
        platform.os_family, platform.arch
    ));

    if platform.needs_distro_confirmation() {
        ui.warning("Unrecognized Linux distribution; install suggestions will be generic");
        let proceed = ui
            .prompt(&Prompt::confirm("unknown_distro", "Continue anyway?", true))?
            .as_bool()
            .unwrap_or(false);
        if !proceed {
            return Err(PocketstackError::Cancelled);
        }
    }

    // Tool availability. All statuses are reported before anything fails.
    let mut statuses = tools::check(required_tools());
    report_tools(ui, &statuses);
    let transfer = tools::select_transfer_tool();

    // The one soft requirement: offer the nvm flow once, then re-check.
    if !runtime_satisfied(&statuses) {
        if let Some(transfer) = transfer {
            let question = format!(
                "Node.js {NODE_MIN_MAJOR}+ not found. Install nvm and the latest LTS release now?"
            );
            let install_node = ui
                .prompt(&Prompt::confirm("install_node", &question, true))?
                .as_bool()
                .unwrap_or(false);
            if install_node {
                runtime::install_latest_lts(transfer)?;
                if let Some(bin) = runtime::nvm_node_bin_dir() {
                    runtime::prepend_path(&bin);
                }
                statuses = tools::check(required_tools());
                if runtime_satisfied(&statuses) {
                    ui.success("Node.js runtime installed");
                }
            }
        }
    }

    // Version resolution, with graceful degradation to the pinned release.
    let mut spinner = ui.start_spinner("Checking the latest PocketBase release...");
    let resolved = ReleaseClient::new().latest();
    match &resolved {
        Some(latest) => spinner.finish_success(&format!("Latest PocketBase release: {latest}")),
        None => spinner.finish_error(&format!(
            "Release index unreachable; using the supported version {SUPPORTED_VERSION}"
        )),
    }
    let version_choice = prompt_version_choice(ui, resolved.as_deref())?;

    let plan = planner::plan(platform, statuses, transfer, version_choice, resolved)?;
    if !plan.is_executable() {
        for tool in &plan.missing_hard {
            if let Some(fix) = plan.remediation.get(tool) {
                ui.message(&format!("  {tool}: {fix}"));
            }
        }
        return plan.ensure_ready().map(|_| ());
    }

    // Project prompts, then the destructive re-clone check right before
    // anything touches the filesystem.
    let name = ui
        .prompt(&Prompt::input("name", "Project name", Some("my-app")))?
        .as_string();
    let default_dir = format!("./{name}");
    let target = PathBuf::from(
        ui.prompt(&Prompt::input("directory", "Install folder", Some(&default_dir)))?
            .as_string(),
    );

    if target.exists() {
        let question = format!(
            "{} already exists. Remove it and start fresh?",
            target.display()
        );
        let wipe = ui
            .prompt(&Prompt::confirm("overwrite", &question, false))?
            .as_bool()
            .unwrap_or(false);
        if !wipe {
            return Err(PocketstackError::Cancelled);
        }
        TemplateCloner::new().remove_existing(&target)?;
    }

    install::execute(&plan, &target, ui)?;

    ui.success(&format!("Project ready at {}", target.display()));
    ui.message(&format!(
        "  cd {} && ./pocketbase/pocketbase serve",
        target.display()
    ));
    Ok(())
}

fn runtime_satisfied(statuses: &[ToolStatus]) -> bool {
    statuses
        .iter()
        .find(|status| status.name == "node")
        .map(ToolStatus::satisfies)
        .unwrap_or(false)
}

fn report_tools(ui: &mut dyn UserInterface, statuses: &[ToolStatus]) {
    for status in statuses {
        if status.satisfies() {
            let version = status.version.as_deref().unwrap_or("found");
            ui.success(&format!("{}: {}", status.name, version));
        } else if status.found {
            ui.warning(&format!(
                "{}: {} does not meet the minimum",
                status.name,
                status.version.as_deref().unwrap_or("unknown version")
            ));
        } else {
            ui.warning(&format!("{}: not found", status.name));
        }
    }
}

/// Ask which version to install, but only when "latest" differs from the
/// pinned release; otherwise the choice would be a single option.
fn prompt_version_choice(
    ui: &mut dyn UserInterface,
    resolved: Option<&str>,
) -> Result<VersionChoice> {
    let Some(latest) = resolved else {
        return Ok(VersionChoice::Pinned);
    };
    if latest == SUPPORTED_VERSION {
        return Ok(VersionChoice::Pinned);
    }

    let answer = ui.prompt(&Prompt::select(
        "version",
        "Which PocketBase version?",
        vec![
            PromptOption::new(format!("latest ({latest})"), "latest"),
            PromptOption::new(format!("supported ({SUPPORTED_VERSION})"), "pinned"),
        ],
    ))?;
    Ok(if answer.as_string() == "latest" {
        VersionChoice::Latest
    } else {
        VersionChoice::Pinned
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tools::check::check_with;
    use crate::ui::MockUI;

    #[test]
    fn version_choice_is_pinned_when_resolver_empty() {
        let mut ui = MockUI::new();
        let choice = prompt_version_choice(&mut ui, None).unwrap();
        assert_eq!(choice, VersionChoice::Pinned);
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn version_choice_skips_prompt_when_latest_is_pinned() {
        let mut ui = MockUI::new();
        let choice = prompt_version_choice(&mut ui, Some(SUPPORTED_VERSION)).unwrap();
        assert_eq!(choice, VersionChoice::Pinned);
        assert!(ui.prompts_shown().is_empty());
    }

    #[test]
    fn version_choice_honors_latest_selection() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("version", "latest");
        let choice = prompt_version_choice(&mut ui, Some("0.25.2")).unwrap();
        assert_eq!(choice, VersionChoice::Latest);
        assert_eq!(ui.prompts_shown(), &["version".to_string()]);
    }

    #[test]
    fn version_choice_honors_pinned_selection() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("version", "pinned");
        let choice = prompt_version_choice(&mut ui, Some("0.25.2")).unwrap();
        assert_eq!(choice, VersionChoice::Pinned);
    }

    #[test]
    fn report_covers_every_status() {
        let statuses = check_with(
            required_tools(),
            |tool| {
                (tool != "unzip").then(|| std::path::PathBuf::from("/usr/bin").join(tool))
            },
            |_| Some("v22.0.0".to_string()),
        );
        let mut ui = MockUI::new();
        report_tools(&mut ui, &statuses);

        assert_eq!(
            ui.successes().len() + ui.warnings().len(),
            required_tools().len()
        );
        assert!(ui.warnings().iter().any(|w| w.contains("unzip")));
    }

    #[test]
    fn runtime_satisfied_reads_the_node_status() {
        let ok = check_with(
            required_tools(),
            |tool| Some(std::path::PathBuf::from("/usr/bin").join(tool)),
            |_| Some("v22.0.0".to_string()),
        );
        assert!(runtime_satisfied(&ok));

        let stale = check_with(
            required_tools(),
            |tool| Some(std::path::PathBuf::from("/usr/bin").join(tool)),
            |_| Some("v21.9.0".to_string()),
        );
        assert!(!runtime_satisfied(&stale));
    }
}
