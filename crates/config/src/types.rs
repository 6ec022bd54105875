//! Connection configuration types for vcli.
//!
//! Responsibilities:
//! - Define the resolved connection descriptor handed to session establishment.
//! - Define the opaque ciphertext token stored in the configuration file.
//!
//! Does NOT handle:
//! - Configuration loading from files (see `loader` module).
//! - Encryption or decryption of the token (see `cipher` module).
//!
//! Invariants:
//! - The password is a `secrecy::SecretString`; Debug output never shows it.
//! - A resolved password is never the empty string (the loader enforces this).

use secrecy::SecretString;
use std::fmt;

/// Resolved connection descriptor for a vCenter endpoint.
///
/// Constructed once per invocation by [`crate::ConfigLoader`], immutable
/// afterwards, and never written back to disk. `password: None` means the
/// caller must prompt interactively before establishing a session.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Hostname or IP of the vCenter server.
    pub host: String,
    /// Management port (default 443).
    pub port: u16,
    /// Login username.
    pub username: String,
    /// Decrypted plaintext password, absent when the config file carries none.
    pub password: Option<SecretString>,
}

impl ConnectionConfig {
    /// True when no password was configured and the caller must prompt for one.
    pub fn requires_prompt(&self) -> bool {
        self.password.is_none()
    }
}

/// Opaque ciphertext token stored in `.vcli.conf` in place of a plaintext
/// password.
///
/// Produced by [`crate::CredentialCipher::encrypt`] and pasted into the
/// config file by the user. The token is self-contained: everything needed
/// for decryption except the embedded key (nonce, ciphertext, tag) is encoded
/// in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedSecret(String);

impl EncryptedSecret {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EncryptedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
