//! VM snapshot management.

use anyhow::Result;
use vcli_client::{ClientError, VcenterClient};

use crate::args::{Cli, SnapshotCommand};
use crate::formatters::{self, OutputFormat, output};

pub async fn run(cli: &Cli, command: &SnapshotCommand) -> Result<()> {
    let format = OutputFormat::parse(&cli.output)?;
    let client = super::connect(cli).await?;

    match command {
        SnapshotCommand::Create {
            vm,
            name,
            description,
        } => {
            let vm_obj = client.find_vm_by_name(vm).await?;
            let snapshot = client
                .create_snapshot(&vm_obj.vm, name, description.as_deref())
                .await?;
            println!("Created snapshot '{}' ({}) on {}", name, snapshot, vm);
        }
        SnapshotCommand::List { vm } => {
            let vm_obj = client.find_vm_by_name(vm).await?;
            let snapshots = client.list_snapshots(&vm_obj.vm).await?;
            output(&snapshots, format, formatters::snapshot_table(&snapshots))?;
        }
        SnapshotCommand::Revert { vm, snapshot } => {
            let vm_obj = client.find_vm_by_name(vm).await?;
            let snap_id = find_snapshot_id(&client, &vm_obj.vm, vm, snapshot).await?;
            client.revert_snapshot(&vm_obj.vm, &snap_id).await?;
            println!("{}: reverted to snapshot '{}'", vm, snapshot);
        }
        SnapshotCommand::Remove { vm, snapshot } => {
            let vm_obj = client.find_vm_by_name(vm).await?;
            let snap_id = find_snapshot_id(&client, &vm_obj.vm, vm, snapshot).await?;
            client.delete_snapshot(&vm_obj.vm, &snap_id).await?;
            println!("{}: removed snapshot '{}'", vm, snapshot);
        }
    }

    Ok(())
}

/// Resolve a snapshot name to its identifier.
async fn find_snapshot_id(
    client: &VcenterClient,
    vm_id: &str,
    vm_name: &str,
    snapshot_name: &str,
) -> Result<String> {
    let snapshots = client.list_snapshots(vm_id).await?;
    snapshots
        .into_iter()
        .find(|s| s.name == snapshot_name)
        .map(|s| s.snapshot)
        .ok_or_else(|| {
            ClientError::NotFound(format!("snapshot '{}' on VM '{}'", snapshot_name, vm_name))
                .into()
        })
}
