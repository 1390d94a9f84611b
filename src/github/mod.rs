pub mod client;
pub mod models;

pub use client::{GitHubClient, GITHUB_API_URL, GITHUB_WEB_URL};
pub use models::{CreateSecretRequest, GenerateRepositoryRequest, PublicKeyMaterial};
