use crate::commands::create::RepositoryResult;
use crate::result::{BootstrapError, Result};
use crate::utils::ProcessManager;
use std::path::PathBuf;

/// A fresh local clone. Later stages receive this path explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClonedRepository {
    pub path: PathBuf,
}

/** Clones the new repository into a base directory
 *
 * # Behavior
 * - Runs `<git> clone <repo_url>.git` with `base_dir` as working directory
 * - A non-zero exit fails with a fixed message; git's stderr goes to the log only
 * - A partially cloned directory is left as is
 */
pub struct LocalMaterializer {
    git: String,
    base_dir: PathBuf,
    process: ProcessManager,
}

impl LocalMaterializer {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self::with_git("git", base_dir)
    }

    /// Uses another git executable (name on `PATH` or explicit path).
    pub fn with_git(git: impl Into<String>, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            git: git.into(),
            base_dir: base_dir.into(),
            process: ProcessManager::new(),
        }
    }

    pub async fn clone_repository(&self, repository: &RepositoryResult) -> Result<ClonedRepository> {
        println!("Cloning repository...");

        let args = vec!["clone".to_string(), repository.clone_url()];
        let output = self
            .process
            .run_captured(&self.git, &args, &self.base_dir)
            .await?;

        if !output.status.success() {
            log::error!(
                "git clone exited with {}: {}",
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            );
            return Err(BootstrapError::process(BootstrapError::CLONE_FAILED));
        }

        let path = self.base_dir.join(repository.repo_name.as_str());
        if !path.is_dir() {
            return Err(BootstrapError::not_found(format!(
                "Clone directory not found: {}",
                path.display()
            )));
        }

        println!("Cloned into: {}", path.display());
        log::info!("Cloned {} into {}", repository.repo_url, path.display());

        Ok(ClonedRepository { path })
    }
}
