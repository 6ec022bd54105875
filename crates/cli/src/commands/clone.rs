//! Full clone of an existing VM.

use anyhow::Result;
use tracing::info;
use vcli_client::models::CloneSpec;

use crate::args::Cli;

pub async fn run(
    cli: &Cli,
    vm_name: &str,
    clone_name: &str,
    datastore: Option<&str>,
    host: Option<&str>,
    power_on: bool,
) -> Result<()> {
    let client = super::connect(cli).await?;
    let source = client.find_vm_by_name(vm_name).await?;
    let placement = super::resolve_placement(&client, host, datastore).await?;

    let spec = CloneSpec {
        source: source.vm,
        name: clone_name.to_string(),
        power_on: power_on.then_some(true),
        placement,
    };

    info!(source = vm_name, clone = clone_name, "cloning VM");
    let new_id = client.clone_vm(&spec).await?;
    println!("Cloned {} to {} ({})", vm_name, clone_name, new_id);
    Ok(())
}
