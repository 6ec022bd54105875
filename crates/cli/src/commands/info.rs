//! Detailed information about a single VM.

use anyhow::Result;

use crate::args::Cli;
use crate::formatters::{self, OutputFormat, output};

pub async fn run(cli: &Cli, vm_name: &str) -> Result<()> {
    let format = OutputFormat::parse(&cli.output)?;
    let client = super::connect(cli).await?;

    let vm = client.find_vm_by_name(vm_name).await?;
    let details = client.get_vm(&vm.vm).await?;
    output(&details, format, formatters::vm_info_table(&details))?;

    Ok(())
}
