use crate::config::{CacheCredentials, Configuration};
use crate::github::GitHubClient;
use crate::result::Result;
use crate::security::SecretSealer;
use crate::utils::spinner;

/** Uploads the Turbo credentials as GitHub Actions secrets
 *
 * # Process
 * 1. Fetches the repository's Actions public key
 * 2. Seals each value against it, in fixed order
 * 3. PUTs each sealed value together with the key id
 *
 * The first failure aborts; secrets already uploaded stay in place.
 */
pub async fn execute(
    github: &GitHubClient,
    config: &Configuration,
    credentials: &CacheCredentials,
) -> Result<()> {
    println!("Creating GitHub Action secrets...");

    let progress = spinner("Fetching repository public key...");
    let material = github
        .get_public_key(&config.new_owner, &config.new_repo)
        .await;
    progress.finish_and_clear();
    let sealer = SecretSealer::from_material(&material?)?;

    for (name, value) in credentials.as_secrets() {
        let sealed = sealer.seal(name, value)?;

        let progress = spinner(format!("Uploading {}...", name));
        let uploaded = github
            .put_secret(&config.new_owner, &config.new_repo, &sealed, sealer.key_id())
            .await;
        progress.finish_and_clear();
        uploaded?;

        println!("Successfully created secret: {}", name);
        log::info!("Created secret {}", name);
    }

    Ok(())
}
