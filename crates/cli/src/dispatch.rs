//! Routes parsed subcommands to their handlers.

use anyhow::Result;
use vcli_client::models::{GuestPowerAction, PowerAction};

use crate::args::{Cli, Commands};
use crate::commands;
use crate::interactive::TerminalPrompt;

pub async fn run_command(cli: Cli) -> Result<()> {
    match &cli.command {
        // Purely local; needs neither config file nor connection.
        Commands::Encrypt => commands::encrypt::run(&TerminalPrompt),

        Commands::List { target } => commands::list::run(&cli, target).await,
        Commands::Info { vm } => commands::info::run(&cli, vm).await,

        Commands::Start { vm } => commands::power::run(&cli, vm, PowerAction::Start).await,
        Commands::Stop { vm } => commands::power::run(&cli, vm, PowerAction::Stop).await,
        Commands::Suspend { vm } => commands::power::run(&cli, vm, PowerAction::Suspend).await,
        Commands::Reset { vm } => commands::power::run(&cli, vm, PowerAction::Reset).await,
        Commands::Shutdown { vm } => {
            commands::power::run_guest(&cli, vm, GuestPowerAction::Shutdown).await
        }
        Commands::Reboot { vm } => {
            commands::power::run_guest(&cli, vm, GuestPowerAction::Reboot).await
        }

        Commands::Snapshot { command } => commands::snapshot::run(&cli, command).await,
        Commands::Clone {
            vm,
            name,
            datastore,
            host,
            power_on,
        } => {
            commands::clone::run(
                &cli,
                vm,
                name,
                datastore.as_deref(),
                host.as_deref(),
                *power_on,
            )
            .await
        }
        Commands::Migrate {
            vm,
            host,
            datastore,
        } => commands::migrate::run(&cli, vm, host.as_deref(), datastore.as_deref()).await,
        Commands::Destroy { vm, yes } => commands::destroy::run(&cli, vm, *yes).await,
    }
}
