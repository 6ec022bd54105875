//! User interaction utilities for the CLI.
//!
//! Responsibilities:
//! - Provide the password-entry seam used by connection resolution and the
//!   encrypt command, so command logic stays testable without a terminal.
//! - Provide destroy confirmation.

use anyhow::Result;
use dialoguer::Password;
use secrecy::SecretString;
use std::io::Write;

/// Source of interactively entered secrets.
///
/// The terminal implementation suppresses echo; tests substitute a canned
/// value instead of touching stdin.
pub trait PasswordPrompt {
    fn prompt(&self, label: &str) -> Result<SecretString>;
}

/// Reads from the controlling terminal with echo disabled.
pub struct TerminalPrompt;

impl PasswordPrompt for TerminalPrompt {
    fn prompt(&self, label: &str) -> Result<SecretString> {
        let value = Password::new().with_prompt(label).interact()?;
        Ok(SecretString::new(value.into()))
    }
}

/// Prompt the user before destroying a VM.
///
/// Returns `true` only when the user answers 'y' or 'Y'.
pub fn confirm_destroy(vm_name: &str) -> Result<bool> {
    print!("Are you sure you want to destroy VM '{}'? [y/N] ", vm_name);
    std::io::stdout().flush()?;

    let mut input = String::new();
    std::io::stdin().read_line(&mut input)?;

    if !input.trim().eq_ignore_ascii_case("y") {
        println!("Destroy cancelled.");
        return Ok(false);
    }

    Ok(true)
}

#[cfg(test)]
pub(crate) mod test_util {
    use super::*;

    /// Prompt stub returning a fixed value.
    pub struct FixedPrompt(pub &'static str);

    impl PasswordPrompt for FixedPrompt {
        fn prompt(&self, _label: &str) -> Result<SecretString> {
            Ok(SecretString::new(self.0.to_string().into()))
        }
    }
}
