//! Error types for configuration resolution.
//!
//! Invariants:
//! - Every variant carries enough context to name the offending file/field.
//! - Cipher errors pass through transparently so callers can tell a bad
//!   token apart from a bad file and give a specific remediation message.
//! - No variant ever contains the password or a decrypted value.

use std::path::PathBuf;
use thiserror::Error;

use crate::cipher::CipherError;

/// Errors that can occur while locating, parsing, or resolving `.vcli.conf`.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No configuration file exists in any searched location. Recoverable:
    /// callers may fall back to flags or fully-interactive prompting.
    #[error("Cannot open conf files: {searched:?}")]
    NotFound { searched: Vec<PathBuf> },

    #[error("Failed to read config file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Missing or empty field '{field}' in config file at {path}")]
    Validation { field: &'static str, path: PathBuf },

    #[error("Invalid value for '{field}' in config file at {path}: {message}")]
    InvalidValue {
        field: &'static str,
        path: PathBuf,
        message: String,
    },

    /// The stored password token could not be decrypted. Fatal: resolution
    /// never substitutes an empty password.
    #[error(transparent)]
    Decryption(#[from] CipherError),
}
