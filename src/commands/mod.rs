pub mod clone;
pub mod create;
pub mod link;
pub mod secrets;

use crate::config::Configuration;
use crate::github::GitHubClient;
use crate::result::Result;
use clone::{ClonedRepository, LocalMaterializer};
use create::RepositoryResult;
use link::CacheLinker;
use std::path::PathBuf;

/// What a run has already changed in the world, for reporting after a failure.
#[derive(Debug, Default)]
pub struct RunProgress {
    pub repository: Option<RepositoryResult>,
    pub clone: Option<ClonedRepository>,
}

impl RunProgress {
    /// Nothing is rolled back; the user is told what remains.
    pub fn leftovers(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(repository) = &self.repository {
            lines.push(format!(
                "Repository {} was created and has been left in place",
                repository.repo_url
            ));
        }
        if let Some(clone) = &self.clone {
            lines.push(format!("Local clone left at {}", clone.path.display()));
        }
        lines
    }
}

/** Drives one bootstrap run: create → clone → link → secrets
 *
 * # Process Flow
 * 1. Generate the repository from the template
 * 2. Clone it into the base directory
 * 3. Link the clone to the Turborepo remote cache
 * 4. Upload sealed Turbo credentials (only when the configuration has them)
 *
 * Each stage runs only if the previous one succeeded. Nothing is retried
 * and nothing is rolled back.
 */
pub struct Bootstrapper {
    github: GitHubClient,
    materializer: LocalMaterializer,
    linker: CacheLinker,
}

impl Bootstrapper {
    pub fn new(config: &Configuration, base_dir: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self::with_parts(
            GitHubClient::new(config.token.clone())?,
            LocalMaterializer::new(base_dir),
            CacheLinker::new(),
        ))
    }

    pub fn with_parts(
        github: GitHubClient,
        materializer: LocalMaterializer,
        linker: CacheLinker,
    ) -> Self {
        Self {
            github,
            materializer,
            linker,
        }
    }

    pub async fn run(&self, config: &Configuration) -> Result<()> {
        let mut progress = RunProgress::default();
        let result = self.run_stages(config, &mut progress).await;

        if let Err(e) = &result {
            log::error!("Bootstrap failed: {}", e);
            for line in progress.leftovers() {
                eprintln!("{}", line);
                log::warn!("{}", line);
            }
        }

        result
    }

    async fn run_stages(&self, config: &Configuration, progress: &mut RunProgress) -> Result<()> {
        let repository = create::execute(&self.github, config).await?;
        let repository = progress.repository.insert(repository);

        let clone = self.materializer.clone_repository(repository).await?;
        let clone = progress.clone.insert(clone);

        self.linker.link(clone).await?;

        match &config.cache {
            Some(credentials) => secrets::execute(&self.github, config, credentials).await?,
            None => log::info!("Secret upload skipped"),
        }

        println!("Bootstrap complete: {}", clone.path.display());
        Ok(())
    }
}
