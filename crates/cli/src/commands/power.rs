//! VM power state operations.
//!
//! Hard operations (start/stop/suspend/reset) go to the power endpoint;
//! shutdown and reboot go through guest tools and require them to be
//! running in the VM.

use anyhow::Result;
use tracing::info;
use vcli_client::models::{GuestPowerAction, PowerAction};

use crate::args::Cli;

pub async fn run(cli: &Cli, vm_name: &str, action: PowerAction) -> Result<()> {
    let client = super::connect(cli).await?;
    let vm = client.find_vm_by_name(vm_name).await?;
    client.power(&vm.vm, action).await?;
    info!(vm = %vm.vm, action = action.as_str(), "power action accepted");
    println!("{}: {} requested", vm_name, action.as_str());
    Ok(())
}

pub async fn run_guest(cli: &Cli, vm_name: &str, action: GuestPowerAction) -> Result<()> {
    let client = super::connect(cli).await?;
    let vm = client.find_vm_by_name(vm_name).await?;
    client.guest_power(&vm.vm, action).await?;
    println!("{}: guest {} requested", vm_name, action.as_str());
    Ok(())
}
