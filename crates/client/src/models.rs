//! Serde models for the vCenter Automation API.
//!
//! Field names follow the wire format; deviations are handled with
//! `#[serde(rename)]` (the API spells memory sizes `memory_size_MiB`).

use serde::{Deserialize, Serialize};
use std::fmt;

/// VM power state as reported by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PowerState {
    #[serde(rename = "POWERED_ON")]
    PoweredOn,
    #[serde(rename = "POWERED_OFF")]
    PoweredOff,
    #[serde(rename = "SUSPENDED")]
    Suspended,
}

impl fmt::Display for PowerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PoweredOn => "poweredOn",
            Self::PoweredOff => "poweredOff",
            Self::Suspended => "suspended",
        };
        f.write_str(s)
    }
}

/// Hard power operation on a VM.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerAction {
    Start,
    Stop,
    Suspend,
    Reset,
}

impl PowerAction {
    /// Query-parameter value for the power endpoint.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Start => "start",
            Self::Stop => "stop",
            Self::Suspend => "suspend",
            Self::Reset => "reset",
        }
    }
}

/// Soft power operation routed through guest tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuestPowerAction {
    Shutdown,
    Reboot,
}

impl GuestPowerAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Shutdown => "shutdown",
            Self::Reboot => "reboot",
        }
    }
}

/// One row of `GET /api/vcenter/vm`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VmSummary {
    /// VM identifier (e.g. `vm-1042`).
    pub vm: String,
    pub name: String,
    pub power_state: PowerState,
    #[serde(default)]
    pub cpu_count: Option<u32>,
    #[serde(rename = "memory_size_MiB", default)]
    pub memory_size_mib: Option<u64>,
}

/// Detailed VM document from `GET /api/vcenter/vm/{vm}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VmInfo {
    pub name: String,
    pub power_state: PowerState,
    #[serde(rename = "guest_OS", default)]
    pub guest_os: Option<String>,
    pub cpu: CpuInfo,
    pub memory: MemoryInfo,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CpuInfo {
    pub count: u32,
    #[serde(default)]
    pub cores_per_socket: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryInfo {
    #[serde(rename = "size_MiB")]
    pub size_mib: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HostSummary {
    pub host: String,
    pub name: String,
    pub connection_state: String,
    #[serde(default)]
    pub power_state: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatastoreSummary {
    pub datastore: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub capacity: Option<u64>,
    #[serde(default)]
    pub free_space: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSummary {
    pub network: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub cluster: String,
    pub name: String,
    pub ha_enabled: bool,
    pub drs_enabled: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatacenterSummary {
    pub datacenter: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcePoolSummary {
    pub resource_pool: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotSummary {
    pub snapshot: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Body of `POST /api/vcenter/vm?action=clone`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CloneSpec {
    pub source: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_on: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
}

/// Body of `POST /api/vcenter/vm/{vm}?action=relocate`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RelocateSpec {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placement: Option<Placement>,
}

/// Target placement shared by clone and relocate.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Placement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cluster: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datastore: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder: Option<String>,
}

impl Placement {
    /// True when no target was given at all.
    pub fn is_empty(&self) -> bool {
        self.host.is_none()
            && self.cluster.is_none()
            && self.datastore.is_none()
            && self.folder.is_none()
    }
}
