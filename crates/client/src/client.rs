//! vCenter Automation REST API client.

use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

use crate::error::{ClientError, Result};
use crate::models::{
    CloneSpec, ClusterSummary, DatacenterSummary, DatastoreSummary, GuestPowerAction, HostSummary,
    NetworkSummary, PowerAction, RelocateSpec, ResourcePoolSummary, SnapshotSummary, VmInfo,
    VmSummary,
};

/// Session token header used by the Automation API.
const SESSION_HEADER: &str = "vmware-api-session-id";

/// Builder for creating a new VcenterClient.
pub struct VcenterClientBuilder {
    base_url: Option<String>,
    skip_verify: bool,
    timeout: Duration,
}

impl Default for VcenterClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            skip_verify: false,
            timeout: Duration::from_secs(vcli_config::constants::DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl VcenterClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the vCenter server (e.g. `https://vcenter:443`).
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Skip TLS certificate verification (self-signed vCenter certificates).
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> Result<VcenterClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = base_url.trim_end_matches('/').to_string();

        let mut http_builder = reqwest::Client::builder().timeout(self.timeout);
        if self.skip_verify && base_url.starts_with("https://") {
            http_builder = http_builder.danger_accept_invalid_certs(true);
        }
        let http = http_builder.build()?;

        Ok(VcenterClient {
            http,
            base_url,
            session: None,
        })
    }
}

/// Client for the vCenter Automation API.
///
/// Call [`VcenterClient::login`] once before invoking operations; every other
/// method sends the session token and fails with
/// [`ClientError::NotAuthenticated`] when none is held.
#[derive(Debug)]
pub struct VcenterClient {
    http: reqwest::Client,
    base_url: String,
    session: Option<SecretString>,
}

impl VcenterClient {
    /// Create a new client builder.
    pub fn builder() -> VcenterClientBuilder {
        VcenterClientBuilder::new()
    }

    /// Establish a session with username/password basic auth.
    ///
    /// Authentication failures are returned as-is; retrying is the caller's
    /// decision.
    pub async fn login(&mut self, username: &str, password: &SecretString) -> Result<()> {
        let url = format!("{}/api/session", self.base_url);
        let resp = self
            .http
            .post(&url)
            .basic_auth(username, Some(password.expose_secret()))
            .send()
            .await?;

        let status = resp.status().as_u16();
        if resp.status().is_success() {
            let token: String = resp.json().await?;
            self.session = Some(SecretString::new(token.into()));
            info!(username, "authenticated with vCenter");
            return Ok(());
        }
        if status == 401 {
            return Err(ClientError::AuthFailed(format!(
                "invalid credentials for user '{}'",
                username
            )));
        }
        Err(Self::error_from_response(&url, resp).await)
    }

    /// Delete the server-side session. Safe to call once; the token is
    /// dropped either way.
    pub async fn logout(&mut self) -> Result<()> {
        let url = format!("{}/api/session", self.base_url);
        let token = self.session_token()?.to_string();
        self.session = None;
        let resp = self
            .http
            .delete(&url)
            .header(SESSION_HEADER, token)
            .send()
            .await?;
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(&url, resp).await)
        }
    }

    // ---------- inventory ----------

    /// List VMs, optionally filtered by exact name.
    pub async fn list_vms(&self, name: Option<&str>) -> Result<Vec<VmSummary>> {
        let query: Vec<(&str, &str)> = name.map(|n| vec![("names", n)]).unwrap_or_default();
        self.get_json("/api/vcenter/vm", &query).await
    }

    /// Look up a single VM by name.
    pub async fn find_vm_by_name(&self, name: &str) -> Result<VmSummary> {
        let mut vms = self.list_vms(Some(name)).await?;
        match vms.len() {
            0 => Err(ClientError::NotFound(format!("VM '{}'", name))),
            _ => Ok(vms.swap_remove(0)),
        }
    }

    pub async fn get_vm(&self, vm: &str) -> Result<VmInfo> {
        self.get_json(&format!("/api/vcenter/vm/{}", vm), &[]).await
    }

    pub async fn list_hosts(&self) -> Result<Vec<HostSummary>> {
        self.get_json("/api/vcenter/host", &[]).await
    }

    pub async fn list_datastores(&self) -> Result<Vec<DatastoreSummary>> {
        self.get_json("/api/vcenter/datastore", &[]).await
    }

    pub async fn list_networks(&self) -> Result<Vec<NetworkSummary>> {
        self.get_json("/api/vcenter/network", &[]).await
    }

    pub async fn list_clusters(&self) -> Result<Vec<ClusterSummary>> {
        self.get_json("/api/vcenter/cluster", &[]).await
    }

    pub async fn list_datacenters(&self) -> Result<Vec<DatacenterSummary>> {
        self.get_json("/api/vcenter/datacenter", &[]).await
    }

    pub async fn list_resource_pools(&self) -> Result<Vec<ResourcePoolSummary>> {
        self.get_json("/api/vcenter/resource-pool", &[]).await
    }

    // ---------- power ----------

    /// Hard power operation (start/stop/suspend/reset).
    pub async fn power(&self, vm: &str, action: PowerAction) -> Result<()> {
        self.post_action(
            &format!("/api/vcenter/vm/{}/power", vm),
            &[("action", action.as_str())],
        )
        .await
    }

    /// Soft power operation routed through guest tools (shutdown/reboot).
    pub async fn guest_power(&self, vm: &str, action: GuestPowerAction) -> Result<()> {
        self.post_action(
            &format!("/api/vcenter/vm/{}/guest/power", vm),
            &[("action", action.as_str())],
        )
        .await
    }

    // ---------- snapshots ----------

    pub async fn list_snapshots(&self, vm: &str) -> Result<Vec<SnapshotSummary>> {
        self.get_json(&format!("/api/vcenter/vm/{}/snapshots", vm), &[])
            .await
    }

    /// Create a snapshot; returns the new snapshot identifier.
    pub async fn create_snapshot(
        &self,
        vm: &str,
        name: &str,
        description: Option<&str>,
    ) -> Result<String> {
        #[derive(Serialize)]
        struct CreateSpec<'a> {
            name: &'a str,
            #[serde(skip_serializing_if = "Option::is_none")]
            description: Option<&'a str>,
        }
        self.post_json(
            &format!("/api/vcenter/vm/{}/snapshots", vm),
            &[],
            &CreateSpec { name, description },
        )
        .await
    }

    pub async fn revert_snapshot(&self, vm: &str, snapshot: &str) -> Result<()> {
        self.post_action(
            &format!("/api/vcenter/vm/{}/snapshots/{}", vm, snapshot),
            &[("action", "revert")],
        )
        .await
    }

    pub async fn delete_snapshot(&self, vm: &str, snapshot: &str) -> Result<()> {
        self.delete(&format!("/api/vcenter/vm/{}/snapshots/{}", vm, snapshot))
            .await
    }

    // ---------- lifecycle ----------

    /// Clone a VM; returns the new VM identifier.
    pub async fn clone_vm(&self, spec: &CloneSpec) -> Result<String> {
        self.post_json("/api/vcenter/vm", &[("action", "clone")], spec)
            .await
    }

    /// Relocate (migrate) a VM to a new host/datastore placement.
    pub async fn relocate_vm(&self, vm: &str, spec: &RelocateSpec) -> Result<()> {
        let url = self.url(&format!("/api/vcenter/vm/{}", vm));
        let resp = self
            .http
            .post(&url)
            .query(&[("action", "relocate")])
            .header(SESSION_HEADER, self.session_token()?)
            .json(spec)
            .send()
            .await?;
        Self::check_empty(&url, resp).await
    }

    /// Delete a VM from the inventory, destroying its disks.
    pub async fn delete_vm(&self, vm: &str) -> Result<()> {
        self.delete(&format!("/api/vcenter/vm/{}", vm)).await
    }

    // ---------- plumbing ----------

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn session_token(&self) -> Result<&str> {
        self.session
            .as_ref()
            .map(|token| token.expose_secret())
            .ok_or(ClientError::NotAuthenticated)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = self.url(path);
        debug!(%url, "GET");
        let resp = self
            .http
            .get(&url)
            .query(query)
            .header(SESSION_HEADER, self.session_token()?)
            .send()
            .await?;
        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            Err(Self::error_from_response(&url, resp).await)
        }
    }

    async fn post_action(&self, path: &str, query: &[(&str, &str)]) -> Result<()> {
        let url = self.url(path);
        debug!(%url, ?query, "POST");
        let resp = self
            .http
            .post(&url)
            .query(query)
            .header(SESSION_HEADER, self.session_token()?)
            .send()
            .await?;
        Self::check_empty(&url, resp).await
    }

    async fn post_json<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, &str)],
        body: &B,
    ) -> Result<T> {
        let url = self.url(path);
        debug!(%url, ?query, "POST");
        let resp = self
            .http
            .post(&url)
            .query(query)
            .header(SESSION_HEADER, self.session_token()?)
            .json(body)
            .send()
            .await?;
        if resp.status().is_success() {
            Ok(resp.json().await?)
        } else {
            Err(Self::error_from_response(&url, resp).await)
        }
    }

    async fn delete(&self, path: &str) -> Result<()> {
        let url = self.url(path);
        debug!(%url, "DELETE");
        let resp = self
            .http
            .delete(&url)
            .header(SESSION_HEADER, self.session_token()?)
            .send()
            .await?;
        Self::check_empty(&url, resp).await
    }

    async fn check_empty(url: &str, resp: reqwest::Response) -> Result<()> {
        if resp.status().is_success() {
            Ok(())
        } else {
            Err(Self::error_from_response(url, resp).await)
        }
    }

    /// Map an error response, pulling the server's `default_message` out of
    /// the Automation API error envelope when present.
    async fn error_from_response(url: &str, resp: reqwest::Response) -> ClientError {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("messages")?
                    .get(0)?
                    .get("default_message")?
                    .as_str()
                    .map(String::from)
            })
            .unwrap_or(body);

        match status {
            401 => ClientError::Unauthorized(message),
            404 => ClientError::NotFound(message),
            _ => ClientError::ApiError {
                status,
                url: url.to_string(),
                message,
            },
        }
    }
}
