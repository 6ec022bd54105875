//! Configuration resolver for the `.vcli.conf` connection file.
//!
//! Responsibilities:
//! - Locate the config file: explicit override, then `$HOME/.vcli.conf`,
//!   then `/etc/.vcli.conf`.
//! - Parse the YAML `vcenter` section and validate required fields.
//! - Decrypt the stored password token into the resolved config.
//!
//! Does NOT handle:
//! - Interactive prompting for a missing password (callers own terminal I/O;
//!   a missing password is a signal, not an error).
//! - Writing the file. The resolver only ever reads it.
//!
//! Invariants:
//! - Cipher errors propagate unchanged; a failed decryption aborts resolution
//!   rather than yielding an empty password.
//! - Search locations are injectable so tests never touch the real home
//!   directory or `/etc`.

mod error;

pub use error::ConfigError;

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::cipher::CredentialCipher;
use crate::constants::{CONFIG_FILE_NAME, DEFAULT_VCENTER_PORT, SYSTEM_CONFIG_PATH};
use crate::types::{ConnectionConfig, EncryptedSecret};

/// On-disk shape of `.vcli.conf`.
#[derive(Debug, Deserialize)]
struct ConfFile {
    vcenter: Option<VcenterSection>,
}

#[derive(Debug, Deserialize)]
struct VcenterSection {
    host: Option<String>,
    port: Option<u16>,
    username: Option<String>,
    password: Option<String>,
}

/// Locates and loads the connection configuration.
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
    home_dir: Option<PathBuf>,
    system_path: PathBuf,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader with the standard search locations.
    pub fn new() -> Self {
        let home_dir = directories::UserDirs::new().map(|dirs| dirs.home_dir().to_path_buf());
        Self {
            config_path: None,
            home_dir,
            system_path: PathBuf::from(SYSTEM_CONFIG_PATH),
        }
    }

    /// Use an explicit config file path instead of the search order.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Override the home directory searched for `.vcli.conf`.
    pub fn with_home_dir(mut self, home: PathBuf) -> Self {
        self.home_dir = Some(home);
        self
    }

    /// Override the system-wide fallback path.
    pub fn with_system_path(mut self, path: PathBuf) -> Self {
        self.system_path = path;
        self
    }

    /// Find the config file, honoring the search order.
    ///
    /// An explicit path override short-circuits the search: if it does not
    /// exist the error names only that path.
    pub fn locate(&self) -> Result<PathBuf, ConfigError> {
        let mut searched = Vec::new();

        if let Some(path) = &self.config_path {
            if path.is_file() {
                return Ok(path.clone());
            }
            searched.push(path.clone());
            return Err(ConfigError::NotFound { searched });
        }

        if let Some(home) = &self.home_dir {
            let candidate = home.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Ok(candidate);
            }
            searched.push(candidate);
        }

        if self.system_path.is_file() {
            return Ok(self.system_path.clone());
        }
        searched.push(self.system_path.clone());

        Err(ConfigError::NotFound { searched })
    }

    /// Locate and load the configuration.
    pub fn load(&self) -> Result<ConnectionConfig, ConfigError> {
        let path = self.locate()?;
        self.load_path(&path)
    }

    /// Load and resolve the configuration from a specific file.
    pub fn load_path(&self, path: &Path) -> Result<ConnectionConfig, ConfigError> {
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let file: ConfFile = serde_yaml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        let section = file.vcenter.ok_or(ConfigError::Validation {
            field: "vcenter",
            path: path.to_path_buf(),
        })?;

        let host = require_field(section.host, "host", path)?;
        let username = require_field(section.username, "username", path)?;

        let port = match section.port {
            None => DEFAULT_VCENTER_PORT,
            Some(0) => {
                return Err(ConfigError::InvalidValue {
                    field: "port",
                    path: path.to_path_buf(),
                    message: "port must be between 1 and 65535".to_string(),
                });
            }
            Some(port) => port,
        };

        // An absent or empty password field means "prompt interactively";
        // anything else is a ciphertext token and must decrypt.
        let password = match section.password.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(token) => Some(CredentialCipher::decrypt(&EncryptedSecret::new(token))?),
        };

        debug!(path = %path.display(), host = %host, port, "loaded vcenter configuration");

        Ok(ConnectionConfig {
            host,
            port,
            username,
            password,
        })
    }
}

fn require_field(
    value: Option<String>,
    field: &'static str,
    path: &Path,
) -> Result<String, ConfigError> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(ConfigError::Validation {
            field,
            path: path.to_path_buf(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::CipherError;
    use std::fs;
    use tempfile::TempDir;

    fn loader_for(dir: &TempDir) -> ConfigLoader {
        // Point both search locations inside the temp dir so the real
        // environment never leaks into tests.
        ConfigLoader::new()
            .with_home_dir(dir.path().join("home"))
            .with_system_path(dir.path().join("etc").join(CONFIG_FILE_NAME))
    }

    fn write_conf(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_locate_prefers_home_over_system() {
        let dir = TempDir::new().unwrap();
        let loader = loader_for(&dir);
        let home_conf = dir.path().join("home").join(CONFIG_FILE_NAME);
        let etc_conf = dir.path().join("etc").join(CONFIG_FILE_NAME);
        write_conf(&home_conf, "vcenter:\n  host: a\n  username: u\n");
        write_conf(&etc_conf, "vcenter:\n  host: b\n  username: u\n");

        assert_eq!(loader.locate().unwrap(), home_conf);
    }

    #[test]
    fn test_locate_falls_back_to_system() {
        let dir = TempDir::new().unwrap();
        let loader = loader_for(&dir);
        let etc_conf = dir.path().join("etc").join(CONFIG_FILE_NAME);
        write_conf(&etc_conf, "vcenter:\n  host: b\n  username: u\n");

        assert_eq!(loader.locate().unwrap(), etc_conf);
    }

    #[test]
    fn test_locate_reports_all_searched_paths() {
        let dir = TempDir::new().unwrap();
        let loader = loader_for(&dir);

        match loader.locate() {
            Err(ConfigError::NotFound { searched }) => assert_eq!(searched.len(), 2),
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_explicit_override_short_circuits() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("custom.conf");
        let loader = loader_for(&dir).with_config_path(missing.clone());

        match loader.locate() {
            Err(ConfigError::NotFound { searched }) => assert_eq!(searched, vec![missing]),
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_load_defaults_port_to_443() {
        let dir = TempDir::new().unwrap();
        let conf = dir.path().join("home").join(CONFIG_FILE_NAME);
        write_conf(
            &conf,
            "vcenter:\n  host: vcenter.example.com\n  username: dn220\n",
        );

        let config = loader_for(&dir).load().unwrap();
        assert_eq!(config.port, 443);
        assert_eq!(config.host, "vcenter.example.com");
        assert_eq!(config.username, "dn220");
        assert!(config.requires_prompt());
    }

    #[test]
    fn test_missing_host_is_validation_error() {
        let dir = TempDir::new().unwrap();
        let conf = dir.path().join("home").join(CONFIG_FILE_NAME);
        write_conf(&conf, "vcenter:\n  username: dn220\n");

        match loader_for(&dir).load() {
            Err(ConfigError::Validation { field, .. }) => assert_eq!(field, "host"),
            other => panic!("expected Validation, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_empty_username_is_validation_error() {
        let dir = TempDir::new().unwrap();
        let conf = dir.path().join("home").join(CONFIG_FILE_NAME);
        write_conf(&conf, "vcenter:\n  host: h\n  username: ''\n");

        match loader_for(&dir).load() {
            Err(ConfigError::Validation { field, .. }) => assert_eq!(field, "username"),
            other => panic!("expected Validation, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_port_zero_rejected() {
        let dir = TempDir::new().unwrap();
        let conf = dir.path().join("home").join(CONFIG_FILE_NAME);
        write_conf(&conf, "vcenter:\n  host: h\n  username: u\n  port: 0\n");

        match loader_for(&dir).load() {
            Err(ConfigError::InvalidValue { field, .. }) => assert_eq!(field, "port"),
            other => panic!("expected InvalidValue, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_malformed_yaml_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let conf = dir.path().join("home").join(CONFIG_FILE_NAME);
        write_conf(&conf, "vcenter: [unclosed\n");

        assert!(matches!(
            loader_for(&dir).load(),
            Err(ConfigError::Parse { .. })
        ));
    }

    #[test]
    fn test_missing_vcenter_section_is_validation_error() {
        let dir = TempDir::new().unwrap();
        let conf = dir.path().join("home").join(CONFIG_FILE_NAME);
        write_conf(&conf, "other:\n  host: h\n");

        match loader_for(&dir).load() {
            Err(ConfigError::Validation { field, .. }) => assert_eq!(field, "vcenter"),
            other => panic!("expected Validation, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_bad_password_token_propagates_cipher_error() {
        let dir = TempDir::new().unwrap();
        let conf = dir.path().join("home").join(CONFIG_FILE_NAME);
        write_conf(
            &conf,
            "vcenter:\n  host: h\n  username: u\n  password: 'AAAA'\n",
        );

        assert!(matches!(
            loader_for(&dir).load(),
            Err(ConfigError::Decryption(CipherError::MalformedToken(_)))
        ));
    }

    #[test]
    fn test_empty_password_field_means_prompt() {
        let dir = TempDir::new().unwrap();
        let conf = dir.path().join("home").join(CONFIG_FILE_NAME);
        write_conf(&conf, "vcenter:\n  host: h\n  username: u\n  password: ''\n");

        let config = loader_for(&dir).load().unwrap();
        assert!(config.requires_prompt());
    }
}
