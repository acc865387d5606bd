//! Template repository cloning.

use std::path::Path;
use std::process::Command;

use crate::error::{PocketstackError, Result};

/// The web-application template cloned into every new project.
pub const TEMPLATE_REPO_URL: &str = "https://github.com/pocketstack/starter-template.git";

/// Clones the project template.
pub struct TemplateCloner {
    repo_url: String,
}

impl TemplateCloner {
    /// Create a cloner for the default template repository.
    pub fn new() -> Self {
        Self::with_repo_url(TEMPLATE_REPO_URL)
    }

    /// Create a cloner for a specific repository (for tests).
    pub fn with_repo_url(url: impl Into<String>) -> Self {
        Self {
            repo_url: url.into(),
        }
    }

    /// Get the repository URL this cloner targets.
    pub fn repo_url(&self) -> &str {
        &self.repo_url
    }

    /// Remove an existing target directory before re-cloning.
    ///
    /// The existence check happens immediately before removal; an
    /// interactive single-user tool accepts the race against concurrent
    /// external modification.
    pub fn remove_existing(&self, dest: &Path) -> Result<()> {
        if dest.exists() {
            std::fs::remove_dir_all(dest).map_err(|source| PocketstackError::Filesystem {
                path: dest.to_path_buf(),
                op: "remove",
                source,
            })?;
        }
        Ok(())
    }

    /// Shallow-clone the template into `dest` and drop its git history so
    /// the result is a fresh project, not a fork.
    pub fn clone_to(&self, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|source| {
                    PocketstackError::Filesystem {
                        path: parent.to_path_buf(),
                        op: "create",
                        source,
                    }
                })?;
            }
        }

        let output = Command::new("git")
            .args(["clone", "--depth", "1", &self.repo_url])
            .arg(dest)
            .output()?;

        if !output.status.success() {
            return Err(PocketstackError::ExternalTool {
                tool: "git".to_string(),
                op: "clone".to_string(),
                detail: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let git_dir = dest.join(".git");
        if git_dir.exists() {
            std::fs::remove_dir_all(&git_dir).map_err(|source| PocketstackError::Filesystem {
                path: git_dir,
                op: "remove",
                source,
            })?;
        }

        Ok(())
    }
}

impl Default for TemplateCloner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// Create a bare git repo with one committed file.
    fn create_bare_repo(parent: &Path) -> PathBuf {
        let bare_path = parent.join("template.git");
        let work_dir = parent.join("work");
        std::fs::create_dir_all(&work_dir).unwrap();

        let run = |args: &[&str], cwd: &Path| {
            let output = Command::new("git").args(args).current_dir(cwd).output().unwrap();
            assert!(
                output.status.success(),
                "git {:?} failed: {}",
                args,
                String::from_utf8_lossy(&output.stderr)
            );
        };

        run(
            &[
                "init",
                "--bare",
                "--initial-branch=main",
                bare_path.to_string_lossy().as_ref(),
            ],
            parent,
        );
        run(
            &[
                "clone",
                bare_path.to_string_lossy().as_ref(),
                work_dir.to_string_lossy().as_ref(),
            ],
            parent,
        );
        run(&["config", "user.name", "Test"], &work_dir);
        run(&["config", "user.email", "test@test.com"], &work_dir);

        std::fs::create_dir_all(work_dir.join("frontend")).unwrap();
        std::fs::write(work_dir.join("frontend/package.json"), "{}\n").unwrap();
        run(&["add", "."], &work_dir);
        run(&["commit", "-m", "Initial commit"], &work_dir);
        run(&["push", "origin", "HEAD:main"], &work_dir);

        bare_path
    }

    #[test]
    fn clone_produces_template_without_history() {
        let temp = TempDir::new().unwrap();
        let bare = create_bare_repo(temp.path());
        let dest = temp.path().join("project");

        let cloner = TemplateCloner::with_repo_url(bare.to_string_lossy());
        cloner.clone_to(&dest).unwrap();

        assert!(dest.join("frontend/package.json").exists());
        assert!(!dest.join(".git").exists());
    }

    #[test]
    fn clone_from_invalid_url_is_an_external_tool_error() {
        let temp = TempDir::new().unwrap();
        let cloner = TemplateCloner::with_repo_url("/nonexistent/repo.git");
        let err = cloner.clone_to(&temp.path().join("project")).unwrap_err();

        match err {
            PocketstackError::ExternalTool { tool, op, .. } => {
                assert_eq!(tool, "git");
                assert_eq!(op, "clone");
            }
            other => panic!("expected ExternalTool, got {other:?}"),
        }
    }

    #[test]
    fn remove_existing_clears_target() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("project");
        std::fs::create_dir_all(dest.join("old")).unwrap();

        let cloner = TemplateCloner::new();
        cloner.remove_existing(&dest).unwrap();
        assert!(!dest.exists());
    }

    #[test]
    fn remove_existing_is_a_no_op_for_absent_target() {
        let temp = TempDir::new().unwrap();
        let cloner = TemplateCloner::new();
        assert!(cloner.remove_existing(&temp.path().join("absent")).is_ok());
    }

    #[test]
    fn default_cloner_points_at_the_template() {
        assert_eq!(TemplateCloner::new().repo_url(), TEMPLATE_REPO_URL);
    }
}
