use crate::github::PublicKeyMaterial;
use crate::result::{BootstrapError, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use crypto_box::PublicKey;
use rand_core::OsRng;
use smol_str::SmolStr;

/// Size in bytes of an X25519 public key.
pub const PUBLIC_KEY_SIZE: usize = 32;

/// A secret value ready for upload: the name plus base64 sealed-box ciphertext.
#[derive(Debug, Clone)]
pub struct SealedSecret {
    pub name: SmolStr,
    pub encrypted_value: String,
}

/** Seals plaintext secrets against a repository's Actions public key
 *
 * # Scheme
 * - libsodium `crypto_box_seal` compatible anonymous sealed box
 * - A fresh ephemeral X25519 key pair per message, nonce derived with BLAKE2b
 * - XSalsa20-Poly1305 over the plaintext
 * - Output layout: ephemeral public key (32) || ciphertext || tag (16)
 *
 * # Security Considerations
 * - Only the holder of the matching private key (GitHub) can open the box
 * - The box carries no sender identity; the client never holds a private key
 * - Ciphertext differs on every call, even for identical plaintext
 * - Key material is used for one run and never written to disk
 */
pub struct SecretSealer {
    public_key: PublicKey,
    key_id: SmolStr,
}

impl SecretSealer {
    /** Decodes the base64 public key fetched from GitHub
     *
     * # Errors
     * - `BootstrapError::Crypto` if the key is not valid base64
     * - `BootstrapError::Crypto` if the decoded key is not 32 bytes
     */
    pub fn from_material(material: &PublicKeyMaterial) -> Result<Self> {
        let decoded = STANDARD.decode(material.key.trim()).map_err(|e| {
            BootstrapError::crypto(format!("Public key is not valid base64: {}", e))
        })?;

        let bytes: [u8; PUBLIC_KEY_SIZE] = decoded.as_slice().try_into().map_err(|_| {
            BootstrapError::crypto(format!(
                "Public key must be {} bytes, got {}",
                PUBLIC_KEY_SIZE,
                decoded.len()
            ))
        })?;

        Ok(Self {
            public_key: PublicKey::from(bytes),
            key_id: material.key_id.clone(),
        })
    }

    pub fn key_id(&self) -> &str {
        &self.key_id
    }

    /** Seals one secret value
     *
     * # Process
     * 1. Encodes the plaintext as UTF-8 bytes
     * 2. Seals the bytes under the repository public key
     * 3. Base64 encodes the sealed box (standard alphabet, padded)
     */
    pub fn seal(&self, name: &str, plaintext: &str) -> Result<SealedSecret> {
        let sealed = self
            .public_key
            .seal(&mut OsRng, plaintext.as_bytes())
            .map_err(|e| BootstrapError::crypto(format!("Failed to seal secret {}: {}", name, e)))?;

        Ok(SealedSecret {
            name: name.into(),
            encrypted_value: STANDARD.encode(sealed),
        })
    }
}
