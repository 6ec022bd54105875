//! Encrypt a plaintext password for storage in `.vcli.conf`.
//!
//! Prompts with echo suppressed and prints the resulting token; the user
//! pastes it into the `password` field of the config file. Needs no config
//! file or vCenter connection.

use anyhow::Result;
use secrecy::ExposeSecret;
use vcli_config::CredentialCipher;

use crate::interactive::PasswordPrompt;

pub fn run(prompt: &dyn PasswordPrompt) -> Result<()> {
    let plaintext = prompt.prompt("Password to Encrypt")?;
    let token = CredentialCipher::encrypt(plaintext.expose_secret())?;
    println!("Encrypted ciphertext: {}", token);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interactive::test_util::FixedPrompt;

    #[test]
    fn test_encrypt_succeeds_for_nonempty_password() {
        assert!(run(&FixedPrompt("hunter2")).is_ok());
    }

    #[test]
    fn test_empty_password_is_an_error() {
        let err = run(&FixedPrompt("")).unwrap_err();
        assert!(err.to_string().contains("Encryption failed"));
    }
}
