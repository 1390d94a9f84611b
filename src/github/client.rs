use crate::github::models::{CreateSecretRequest, GenerateRepositoryRequest, PublicKeyMaterial};
use crate::result::{BootstrapError, Result};
use crate::security::SealedSecret;
use reqwest::header::ACCEPT;
use reqwest::{Client, Method, RequestBuilder};
use smol_str::SmolStr;

pub const GITHUB_API_URL: &str = "https://api.github.com";
pub const GITHUB_WEB_URL: &str = "https://github.com";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const GITHUB_MEDIA_TYPE: &str = "application/vnd.github+json";
const GITHUB_API_VERSION: &str = "2022-11-28";

/** Thin client over the three GitHub REST endpoints a bootstrap run needs
 *
 * # Behavior
 * - Every request carries the bearer token, the GitHub media type and the
 *   pinned API version header
 * - Any non-2xx status becomes `BootstrapError::Api` with the call's context
 * - No retries; a transport error surfaces as `BootstrapError::Http`
 */
pub struct GitHubClient {
    client: Client,
    api_base: String,
    token: SmolStr,
}

impl GitHubClient {
    pub fn new(token: impl Into<SmolStr>) -> Result<Self> {
        Self::with_base_url(GITHUB_API_URL, token)
    }

    /// Points the client at another API root (GitHub Enterprise, or a local mock).
    pub fn with_base_url(api_base: impl Into<String>, token: impl Into<SmolStr>) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        let api_base = api_base.into().trim_end_matches('/').to_string();

        Ok(Self {
            client,
            api_base,
            token: token.into(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.api_base, path))
            .header(ACCEPT, GITHUB_MEDIA_TYPE)
            .header("X-GitHub-Api-Version", GITHUB_API_VERSION)
            .bearer_auth(&self.token)
    }

    /// The response body is not read; only the status matters.
    pub async fn generate_from_template(
        &self,
        template_owner: &str,
        template_repo: &str,
        request: &GenerateRepositoryRequest,
    ) -> Result<()> {
        let path = format!("/repos/{}/{}/generate", template_owner, template_repo);
        log::info!(
            "POST {} (new repository {}/{})",
            path,
            request.owner,
            request.name
        );

        let response = self.request(Method::POST, &path).json(request).send().await?;
        let status = response.status();

        if !status.is_success() {
            log::error!("Generate from template failed: HTTP {}", status);
            return Err(BootstrapError::api(
                BootstrapError::CREATE_REPO_FAILED,
                status,
            ));
        }

        Ok(())
    }

    pub async fn get_public_key(&self, owner: &str, repo: &str) -> Result<PublicKeyMaterial> {
        let path = format!("/repos/{}/{}/actions/secrets/public-key", owner, repo);
        log::info!("GET {}", path);

        let response = self.request(Method::GET, &path).send().await?;
        let status = response.status();

        if !status.is_success() {
            log::error!("Fetching Actions public key failed: HTTP {}", status);
            return Err(BootstrapError::api(
                BootstrapError::PUBLIC_KEY_FAILED,
                status,
            ));
        }

        Ok(response.json::<PublicKeyMaterial>().await?)
    }

    pub async fn put_secret(
        &self,
        owner: &str,
        repo: &str,
        secret: &SealedSecret,
        key_id: &str,
    ) -> Result<()> {
        let path = format!("/repos/{}/{}/actions/secrets/{}", owner, repo, secret.name);
        log::info!("PUT {} (key id {})", path, key_id);

        let body = CreateSecretRequest {
            encrypted_value: &secret.encrypted_value,
            key_id,
        };
        let response = self.request(Method::PUT, &path).json(&body).send().await?;
        let status = response.status();

        if !status.is_success() {
            log::error!("Creating secret {} failed: HTTP {}", secret.name, status);
            return Err(BootstrapError::api(
                format!("Failed to create secret {}", secret.name),
                status,
            ));
        }

        Ok(())
    }
}
