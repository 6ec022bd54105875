//! Permanently delete a VM and its disks.

use anyhow::Result;
use tracing::warn;
use vcli_client::models::{PowerAction, PowerState};

use crate::args::Cli;
use crate::interactive;

pub async fn run(cli: &Cli, vm_name: &str, yes: bool) -> Result<()> {
    let client = super::connect(cli).await?;
    let vm = client.find_vm_by_name(vm_name).await?;

    if !yes && !interactive::confirm_destroy(vm_name)? {
        return Ok(());
    }

    // The API refuses to delete a running VM; power it off first.
    if vm.power_state == PowerState::PoweredOn {
        warn!(vm = %vm.vm, "VM is powered on, stopping before delete");
        client.power(&vm.vm, PowerAction::Stop).await?;
    }

    client.delete_vm(&vm.vm).await?;
    println!("{}: destroyed", vm_name);
    Ok(())
}
