//! Configuration management for vcli.
//!
//! This crate owns the two pieces of logic the tool does not delegate to
//! vCenter: locating and parsing the `.vcli.conf` connection file, and the
//! reversible encryption of the password stored in it.

pub mod cipher;
pub mod constants;
mod loader;
mod types;

pub use cipher::{CipherError, CredentialCipher};
pub use loader::{ConfigError, ConfigLoader};
pub use types::{ConnectionConfig, EncryptedSecret};
