//! Centralized constants for the vcli workspace.
//!
//! Default values used across crates to avoid magic number duplication.

/// Default vCenter HTTPS management port.
pub const DEFAULT_VCENTER_PORT: u16 = 443;

/// Name of the per-user configuration file, searched in the home directory.
pub const CONFIG_FILE_NAME: &str = ".vcli.conf";

/// System-wide fallback configuration file.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/.vcli.conf";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
