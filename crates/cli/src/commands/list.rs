//! Tabular listings of vCenter inventory objects.

use anyhow::Result;
use tracing::info;

use crate::args::{Cli, ListTarget};
use crate::formatters::{self, OutputFormat, output};

pub async fn run(cli: &Cli, target: &ListTarget) -> Result<()> {
    let format = OutputFormat::parse(&cli.output)?;
    let client = super::connect(cli).await?;

    match target {
        ListTarget::Vm { name } => {
            info!(filter = ?name, "listing VMs");
            let vms = client.list_vms(name.as_deref()).await?;
            output(&vms, format, formatters::vm_table(&vms))?;
        }
        ListTarget::Host => {
            let hosts = client.list_hosts().await?;
            output(&hosts, format, formatters::host_table(&hosts))?;
        }
        ListTarget::Datastore => {
            let datastores = client.list_datastores().await?;
            output(&datastores, format, formatters::datastore_table(&datastores))?;
        }
        ListTarget::Network => {
            let networks = client.list_networks().await?;
            output(&networks, format, formatters::network_table(&networks))?;
        }
        ListTarget::Cluster => {
            let clusters = client.list_clusters().await?;
            output(&clusters, format, formatters::cluster_table(&clusters))?;
        }
        ListTarget::Datacenter => {
            let datacenters = client.list_datacenters().await?;
            output(&datacenters, format, formatters::datacenter_table(&datacenters))?;
        }
        ListTarget::Rp => {
            let pools = client.list_resource_pools().await?;
            output(&pools, format, formatters::resource_pool_table(&pools))?;
        }
        ListTarget::Snapshot { vm } => {
            let vm = client.find_vm_by_name(vm).await?;
            let snapshots = client.list_snapshots(&vm.vm).await?;
            output(&snapshots, format, formatters::snapshot_table(&snapshots))?;
        }
    }

    Ok(())
}
