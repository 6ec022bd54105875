//! End-to-end resolution tests: encrypt a password, store the token in a
//! config file, and resolve it back through the loader.

use secrecy::ExposeSecret;
use std::fs;
use tempfile::TempDir;
use vcli_config::{CipherError, ConfigError, ConfigLoader, CredentialCipher, EncryptedSecret};

fn loader_for(dir: &TempDir) -> ConfigLoader {
    ConfigLoader::new()
        .with_home_dir(dir.path().join("home"))
        .with_system_path(dir.path().join("etc").join(".vcli.conf"))
}

fn write_home_conf(dir: &TempDir, contents: &str) {
    let home = dir.path().join("home");
    fs::create_dir_all(&home).unwrap();
    fs::write(home.join(".vcli.conf"), contents).unwrap();
}

#[test]
fn resolves_full_config_with_encrypted_password() {
    let dir = TempDir::new().unwrap();
    let token = CredentialCipher::encrypt("VMware1!").unwrap();
    write_home_conf(
        &dir,
        &format!(
            "vcenter:\n  host: 'vcenter.example.com'\n  port: 443\n  username: 'dn220'\n  password: '{}'\n",
            token
        ),
    );

    let config = loader_for(&dir).load().unwrap();
    assert_eq!(config.host, "vcenter.example.com");
    assert_eq!(config.port, 443);
    assert_eq!(config.username, "dn220");
    assert!(!config.requires_prompt());
    assert_eq!(config.password.unwrap().expose_secret(), "VMware1!");
}

#[test]
fn missing_password_resolves_with_prompt_indicator() {
    let dir = TempDir::new().unwrap();
    write_home_conf(
        &dir,
        "vcenter:\n  host: 'vcenter.example.com'\n  username: 'dn220'\n",
    );

    let config = loader_for(&dir).load().unwrap();
    assert!(config.requires_prompt());
    assert!(config.password.is_none());
}

#[test]
fn tampered_stored_token_aborts_resolution() {
    let dir = TempDir::new().unwrap();
    let token = CredentialCipher::encrypt("VMware1!").unwrap().to_string();
    // Swap one character of the token. Depending on where it lands this is
    // either invalid base64 or a failed authentication tag; both must refuse
    // to resolve rather than hand back a wrong password.
    let mut chars: Vec<char> = token.chars().collect();
    chars[5] = if chars[5] == 'A' { 'B' } else { 'A' };
    let tampered: String = chars.into_iter().collect();

    write_home_conf(
        &dir,
        &format!("vcenter:\n  host: h\n  username: u\n  password: '{}'\n", tampered),
    );

    assert!(matches!(
        loader_for(&dir).load(),
        Err(ConfigError::Decryption(_))
    ));
}

#[test]
fn python_era_cbc_token_is_rejected_not_misread() {
    // A token from the legacy (unauthenticated CBC) format: decodes as
    // base64 but cannot pass GCM authentication.
    let legacy = EncryptedSecret::new("tu7J5GCqy9407ikA1glYEFx9S1+Ebfs0G3lVMc7Cm4i9/4qmpHq+uYkbP91kKgb+");
    assert!(matches!(
        CredentialCipher::decrypt(&legacy),
        Err(CipherError::DecryptionFailed(_))
    ));
}
