use reqwest::StatusCode;
use std::borrow::Cow;
use thiserror::Error;

/** Main Result type alias for repo-bootstrap operations
 *
 * # Usage
 * ```no_run
 * use repo_bootstrap::result::Result;
 *
 * fn read_token(path: &str) -> Result<String> {
 *     // Function automatically propagates BootstrapError
 *     Ok(std::fs::read_to_string(path)?)
 * }
 * ```
 */
pub type Result<T> = std::result::Result<T, BootstrapError>;

/** Error enumeration for every stage of a bootstrap run
 *
 * # Error Categories
 * - **Config**: a required value could not be resolved, or failed validation
 * - **Api**: GitHub answered with a non-success status
 * - **Http**: the request never produced a response (DNS, TLS, connection)
 * - **Process**: `git` or `npx turbo link` failed or could not be spawned
 * - **NotFound**: an executable is missing from `PATH`
 * - **Crypto**: public key material is unusable, or sealing failed
 * - **Io** / **JsonError**: conversions from std and serde_json
 *
 * # Design Notes
 * - Uses `Cow<'static, str>` so fixed stage messages never allocate
 * - `Api` keeps the status code so callers can match on it
 */
#[derive(Error, Debug)]
pub enum BootstrapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(Cow<'static, str>),

    #[error("{context}: {status}")]
    Api {
        context: Cow<'static, str>,
        status: StatusCode,
    },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Process error: {0}")]
    Process(Cow<'static, str>),

    #[error("Not found: {0}")]
    NotFound(Cow<'static, str>),

    #[error("Crypto error: {0}")]
    Crypto(Cow<'static, str>),

    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/** Error constants and constructor methods
 *
 * # Usage Examples
 * ```ignore
 * use repo_bootstrap::result::BootstrapError;
 *
 * return Err(BootstrapError::process(BootstrapError::CLONE_FAILED));
 * return Err(BootstrapError::config(format!("{} is not a valid name", name)));
 * ```
 */
impl BootstrapError {
    // Subprocess stage messages
    pub const CLONE_FAILED: &'static str = "Failed to clone repository";
    pub const LINK_FAILED: &'static str = "Failed to run turbo link";

    // API stage contexts
    pub const CREATE_REPO_FAILED: &'static str = "Failed to create repo";
    pub const PUBLIC_KEY_FAILED: &'static str = "Failed to get public key";

    pub fn config(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Config(msg.into())
    }

    /** Creates an Api error from a context line and the response status
     *
     * The rendered message is `"<context>: <code> <reason>"`, e.g.
     * `"Failed to create repo: 422 Unprocessable Entity"`.
     */
    pub fn api(context: impl Into<Cow<'static, str>>, status: StatusCode) -> Self {
        Self::Api {
            context: context.into(),
            status,
        }
    }

    pub fn process(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Process(msg.into())
    }

    pub fn not_found(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn crypto(msg: impl Into<Cow<'static, str>>) -> Self {
        Self::Crypto(msg.into())
    }

    /// Status code of a failed API call, if this is one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_renders_status_text() {
        let err = BootstrapError::api(
            BootstrapError::CREATE_REPO_FAILED,
            StatusCode::UNPROCESSABLE_ENTITY,
        );
        assert_eq!(
            err.to_string(),
            "Failed to create repo: 422 Unprocessable Entity"
        );
        assert_eq!(err.status(), Some(StatusCode::UNPROCESSABLE_ENTITY));
    }

    #[test]
    fn fixed_process_messages() {
        let err = BootstrapError::process(BootstrapError::CLONE_FAILED);
        assert_eq!(err.to_string(), "Process error: Failed to clone repository");
        assert!(err.status().is_none());
    }
}
