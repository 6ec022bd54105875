//! Relocate a VM to another host and/or datastore.

use anyhow::{Result, anyhow};
use tracing::info;
use vcli_client::models::RelocateSpec;

use crate::args::Cli;

pub async fn run(
    cli: &Cli,
    vm_name: &str,
    host: Option<&str>,
    datastore: Option<&str>,
) -> Result<()> {
    if host.is_none() && datastore.is_none() {
        return Err(anyhow!("migrate needs at least one of --host or --datastore"));
    }

    let client = super::connect(cli).await?;
    let vm = client.find_vm_by_name(vm_name).await?;
    let placement = super::resolve_placement(&client, host, datastore).await?;

    info!(vm = %vm.vm, ?host, ?datastore, "relocating VM");
    client
        .relocate_vm(&vm.vm, &RelocateSpec { placement })
        .await?;
    println!("{}: migration complete", vm_name);
    Ok(())
}
