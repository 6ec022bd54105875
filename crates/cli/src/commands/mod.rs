//! Command implementations and shared connection resolution.
//!
//! Responsibilities:
//! - Merge the config file with CLI/env overrides into a usable connection.
//! - Prompt for the password when none is stored.
//! - Build and log in the vCenter client handed to each command.
//!
//! Invariants:
//! - A decryption failure aborts before any session attempt.
//! - A missing config file is recoverable when `--host`/`--username` cover
//!   the required fields; missing fields are reported, not prompted for.

pub mod clone;
pub mod destroy;
pub mod encrypt;
pub mod info;
pub mod list;
pub mod migrate;
pub mod power;
pub mod snapshot;

use anyhow::{Result, anyhow};
use std::time::Duration;
use tracing::debug;
use vcli_client::models::Placement;
use vcli_client::{ClientError, VcenterClient};
use vcli_config::constants::{DEFAULT_TIMEOUT_SECS, DEFAULT_VCENTER_PORT};
use vcli_config::{ConfigError, ConfigLoader, ConnectionConfig};

use crate::args::Cli;
use crate::interactive::{PasswordPrompt, TerminalPrompt};

/// Resolve the connection descriptor from the config file and CLI overrides,
/// prompting for the password when none is stored.
pub(crate) fn resolve_connection(
    cli: &Cli,
    prompt: &dyn PasswordPrompt,
) -> Result<ConnectionConfig> {
    let mut loader = ConfigLoader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_config_path(path.clone());
    }

    let file_config = match loader.load() {
        Ok(config) => Some(config),
        // Recoverable: flags or prompting can still supply everything.
        Err(ConfigError::NotFound { searched }) => {
            debug!(?searched, "no config file found, relying on flags");
            None
        }
        // Parse, validation, and decryption problems are fatal as-is.
        Err(e) => return Err(e.into()),
    };

    let host = cli
        .host
        .clone()
        .or_else(|| file_config.as_ref().map(|c| c.host.clone()))
        .ok_or_else(|| {
            anyhow!("vCenter host not defined; set 'host' in .vcli.conf or pass --host")
        })?;
    let username = cli
        .username
        .clone()
        .or_else(|| file_config.as_ref().map(|c| c.username.clone()))
        .ok_or_else(|| {
            anyhow!("vCenter username not defined; set 'username' in .vcli.conf or pass --username")
        })?;
    let port = cli
        .port
        .or(file_config.as_ref().map(|c| c.port))
        .unwrap_or(DEFAULT_VCENTER_PORT);

    let password = match file_config.and_then(|c| c.password) {
        Some(password) => password,
        None => prompt.prompt("VCenter Password")?,
    };

    Ok(ConnectionConfig {
        host,
        port,
        username,
        password: Some(password),
    })
}

/// Resolve the connection and establish an authenticated session.
pub(crate) async fn connect(cli: &Cli) -> Result<VcenterClient> {
    let config = resolve_connection(cli, &TerminalPrompt)?;
    let password = config
        .password
        .clone()
        .ok_or_else(|| anyhow!("no password resolved"))?;

    let mut client = VcenterClient::builder()
        .base_url(format!("https://{}:{}", config.host, config.port))
        .skip_verify(!cli.verify_tls)
        .timeout(Duration::from_secs(cli.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS)))
        .build()?;
    client.login(&config.username, &password).await?;
    Ok(client)
}

/// Resolve `--host`/`--datastore` names into a placement spec, or `None`
/// when neither was given. Names are matched exactly against the inventory.
pub(crate) async fn resolve_placement(
    client: &VcenterClient,
    host_name: Option<&str>,
    datastore_name: Option<&str>,
) -> Result<Option<Placement>> {
    let mut placement = Placement::default();

    if let Some(name) = host_name {
        let hosts = client.list_hosts().await?;
        let host = hosts
            .into_iter()
            .find(|h| h.name == name)
            .ok_or_else(|| ClientError::NotFound(format!("host '{}'", name)))?;
        placement.host = Some(host.host);
    }
    if let Some(name) = datastore_name {
        let datastores = client.list_datastores().await?;
        let datastore = datastores
            .into_iter()
            .find(|d| d.name == name)
            .ok_or_else(|| ClientError::NotFound(format!("datastore '{}'", name)))?;
        placement.datastore = Some(datastore.datastore);
    }

    if placement.is_empty() {
        Ok(None)
    } else {
        Ok(Some(placement))
    }
}
