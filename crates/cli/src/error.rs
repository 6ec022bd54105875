//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map client, config, and cipher errors to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-7 are reserved for specific error categories.

use vcli_client::ClientError;
use vcli_config::{CipherError, ConfigError};

/// Structured exit codes for vcli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Command completed successfully.
    Success = 0,

    /// Unhandled or generic failure.
    GeneralError = 1,

    /// Invalid credentials or rejected session.
    AuthenticationFailed = 2,

    /// Network, timeout, or DNS failure reaching vCenter.
    ConnectionError = 3,

    /// VM, snapshot, or other inventory object not found.
    NotFound = 4,

    /// Bad parameters or an unusable server response.
    ValidationError = 5,

    /// Configuration file is missing required fields or unparseable.
    ConfigError = 6,

    /// The stored password token could not be decrypted.
    DecryptionError = 7,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            e if e.is_auth_error() => ExitCode::AuthenticationFailed,
            ClientError::NotFound(_) => ExitCode::NotFound,
            ClientError::ApiError { status: 400, .. } => ExitCode::ValidationError,
            ClientError::ApiError { status: 401, .. } => ExitCode::AuthenticationFailed,
            ClientError::InvalidResponse(_) => ExitCode::ValidationError,
            e if e.is_connection_error() => ExitCode::ConnectionError,
            _ => ExitCode::GeneralError,
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::Decryption(_) => ExitCode::DecryptionError,
            _ => ExitCode::ConfigError,
        }
    }
}

impl From<&CipherError> for ExitCode {
    fn from(err: &CipherError) -> Self {
        match err {
            CipherError::DecryptionFailed(_) | CipherError::MalformedToken(_) => {
                ExitCode::DecryptionError
            }
            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no known error type is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(err);
            }
            if let Some(err) = cause.downcast_ref::<CipherError>() {
                return ExitCode::from(err);
            }
        }
        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::AuthenticationFailed.as_i32(), 2);
        assert_eq!(ExitCode::DecryptionError.as_i32(), 7);
    }

    #[test]
    fn test_auth_failure_maps_to_two() {
        let err = ClientError::AuthFailed("bad credentials".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::AuthenticationFailed);
    }

    #[test]
    fn test_not_found_maps_to_four() {
        let err = ClientError::NotFound("VM 'web01'".to_string());
        assert_eq!(ExitCode::from(&err), ExitCode::NotFound);
    }

    #[test]
    fn test_config_decryption_maps_to_seven() {
        let err = ConfigError::Decryption(CipherError::DecryptionFailed(
            "authentication tag mismatch".to_string(),
        ));
        assert_eq!(ExitCode::from(&err), ExitCode::DecryptionError);
    }

    #[test]
    fn test_config_not_found_maps_to_six() {
        let err = ConfigError::NotFound { searched: vec![] };
        assert_eq!(ExitCode::from(&err), ExitCode::ConfigError);
    }

    #[test]
    fn test_exit_code_found_through_anyhow_chain() {
        let err = anyhow::Error::new(ClientError::NotAuthenticated).context("while listing VMs");
        assert_eq!(err.exit_code(), ExitCode::AuthenticationFailed);
    }

    #[test]
    fn test_unknown_error_is_general() {
        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
