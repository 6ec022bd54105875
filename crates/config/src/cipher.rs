//! Reversible password encryption for the configuration file.
//!
//! Responsibilities:
//! - Encrypt a plaintext password into a storable printable token.
//! - Decrypt a token back to plaintext when resolving the configuration.
//!
//! Scheme: AES-256-GCM with a random 96-bit nonce per encryption. The token
//! is `base64(nonce || ciphertext || tag)`, so repeated encryptions of the
//! same plaintext yield different tokens. The key is derived with Argon2id
//! (fixed parameters: m=19456 KiB, t=2, p=1) from a passphrase and salt
//! embedded below; the config file format carries no key material, so every
//! compatible build must derive the identical key.
//!
//! Threat model: this hides the password from casual view of the file. It
//! does not resist a local attacker who has both the file and the binary;
//! that is a closed design constraint of the format, not an oversight.

use aes_gcm::aead::{Aead, KeyInit};
use aes_gcm::{Aes256Gcm, Nonce};
use argon2::{Algorithm, Argon2, Params, Version};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use rand::RngExt;
use secrecy::SecretString;
use std::sync::OnceLock;
use thiserror::Error;

use crate::types::EncryptedSecret;

/// Errors that can occur during cipher operations.
#[derive(Debug, Error)]
pub enum CipherError {
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("Malformed ciphertext token: {0}")]
    MalformedToken(String),

    #[error("Key derivation failed")]
    KeyDerivationFailed,
}

pub type Result<T> = std::result::Result<T, CipherError>;

/// Fixed key-derivation inputs. Embedded because the config file carries no
/// separate key field; changing either constant is a format break.
const KEY_PASSPHRASE: &[u8] = b"vcli credential cipher v1";
const KEY_SALT: &[u8] = b"vcli.conf password salt";

const KEY_LEN: usize = 32;
const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;

/// Derives the fixed AES-256 key. `None` only if the Argon2 parameters are
/// rejected, which the constants above rule out in practice.
fn derive_fixed_key() -> Option<[u8; KEY_LEN]> {
    let params = Params::new(19_456, 2, 1, Some(KEY_LEN)).ok()?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let mut key = [0u8; KEY_LEN];
    argon2
        .hash_password_into(KEY_PASSPHRASE, KEY_SALT, &mut key)
        .ok()?;
    Some(key)
}

/// Key derivation is slow by design; derive once per process.
fn cipher_key() -> Result<[u8; KEY_LEN]> {
    static KEY: OnceLock<Option<[u8; KEY_LEN]>> = OnceLock::new();
    KEY.get_or_init(derive_fixed_key)
        .ok_or(CipherError::KeyDerivationFailed)
}

/// Symmetric encryption of the stored password.
pub struct CredentialCipher;

impl CredentialCipher {
    /// Encrypts a plaintext password into a printable token.
    ///
    /// Tokens are non-deterministic: each call draws a fresh nonce.
    pub fn encrypt(plaintext: &str) -> Result<EncryptedSecret> {
        if plaintext.is_empty() {
            return Err(CipherError::EncryptionFailed(
                "plaintext password is empty".to_string(),
            ));
        }

        let key = cipher_key()?;
        let cipher = Aes256Gcm::new((&key).into());
        let mut nonce_bytes = [0u8; NONCE_LEN];
        rand::rng().fill(&mut nonce_bytes);

        let ciphertext = cipher
            .encrypt(Nonce::from_slice(&nonce_bytes), plaintext.as_bytes())
            .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

        let mut buf = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        buf.extend_from_slice(&nonce_bytes);
        buf.extend_from_slice(&ciphertext);

        Ok(EncryptedSecret::new(BASE64.encode(buf)))
    }

    /// Decrypts a token produced by [`CredentialCipher::encrypt`].
    ///
    /// Fails with [`CipherError::MalformedToken`] when the token is not valid
    /// base64 or too short to hold a nonce and tag, and with
    /// [`CipherError::DecryptionFailed`] when the authentication tag does not
    /// verify. A tampered token never yields a wrong plaintext.
    pub fn decrypt(token: &EncryptedSecret) -> Result<SecretString> {
        let raw = BASE64
            .decode(token.as_str().trim())
            .map_err(|e| CipherError::MalformedToken(e.to_string()))?;

        if raw.len() < NONCE_LEN + TAG_LEN {
            return Err(CipherError::MalformedToken(format!(
                "token too short: {} bytes",
                raw.len()
            )));
        }
        let (nonce_bytes, ciphertext) = raw.split_at(NONCE_LEN);

        let key = cipher_key()?;
        let cipher = Aes256Gcm::new((&key).into());
        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce_bytes), ciphertext)
            .map_err(|_| {
                CipherError::DecryptionFailed("authentication tag mismatch".to_string())
            })?;

        let plaintext = String::from_utf8(plaintext)
            .map_err(|e| CipherError::DecryptionFailed(e.to_string()))?;
        if plaintext.is_empty() {
            return Err(CipherError::DecryptionFailed(
                "decrypted password is empty".to_string(),
            ));
        }

        Ok(SecretString::new(plaintext.into()))
    }
}
