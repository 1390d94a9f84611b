use crate::config::Configuration;
use crate::github::{GenerateRepositoryRequest, GitHubClient, GITHUB_WEB_URL};
use crate::result::Result;
use crate::utils::spinner;
use smol_str::SmolStr;

/// A repository generated from the template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryResult {
    pub repo_url: String,
    pub repo_name: SmolStr,
}

impl RepositoryResult {
    /// The web URL is composed from owner and name, never read from a response.
    pub fn for_repository(owner: &str, name: &str) -> Self {
        Self {
            repo_url: format!("{}/{}/{}", GITHUB_WEB_URL, owner, name),
            repo_name: name.into(),
        }
    }

    pub fn clone_url(&self) -> String {
        format!("{}.git", self.repo_url)
    }
}

pub async fn execute(github: &GitHubClient, config: &Configuration) -> Result<RepositoryResult> {
    let request = GenerateRepositoryRequest::public(config.new_owner.clone(), config.new_repo.clone());

    let progress = spinner(format!(
        "Generating {}/{} from {}/{}...",
        config.new_owner, config.new_repo, config.template_owner, config.template_repo
    ));
    let result = github
        .generate_from_template(&config.template_owner, &config.template_repo, &request)
        .await;
    progress.finish_and_clear();
    result?;

    let repository = RepositoryResult::for_repository(&config.new_owner, &config.new_repo);
    println!("Repository created: {}", repository.repo_url);
    log::info!("Repository created: {}", repository.repo_url);

    Ok(repository)
}
