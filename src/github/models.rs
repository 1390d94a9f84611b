use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// Body of `POST /repos/{template_owner}/{template_repo}/generate`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRepositoryRequest {
    pub owner: SmolStr,
    pub name: SmolStr,
    pub private: bool,
}

impl GenerateRepositoryRequest {
    /// New repositories are always public.
    pub fn public(owner: impl Into<SmolStr>, name: impl Into<SmolStr>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
            private: false,
        }
    }
}

/// Response of `GET /repos/{owner}/{repo}/actions/secrets/public-key`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PublicKeyMaterial {
    pub key_id: SmolStr,
    /// Base64 encoded X25519 public key.
    pub key: String,
}

/// Body of `PUT /repos/{owner}/{repo}/actions/secrets/{name}`.
#[derive(Debug, Serialize)]
pub struct CreateSecretRequest<'a> {
    pub encrypted_value: &'a str,
    pub key_id: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn generate_body_is_public() {
        let body = serde_json::to_value(GenerateRepositoryRequest::public("acme", "widgets")).unwrap();
        assert_eq!(
            body,
            json!({ "owner": "acme", "name": "widgets", "private": false })
        );
    }

    #[test]
    fn public_key_ignores_extra_fields() {
        let material: PublicKeyMaterial = serde_json::from_str(
            r#"{"key_id":"568250167242549743","key":"aGVsbG8=","url":"ignored"}"#,
        )
        .unwrap();
        assert_eq!(material.key_id, "568250167242549743");
        assert_eq!(material.key, "aGVsbG8=");
    }
}
