//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load configuration (see `commands` module).

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "vcli")]
#[command(about = "vcli - Manage VMware vCenter virtual machines from the command line", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  vcli encrypt\n  vcli list vm\n  vcli list vm --name web01\n  vcli info web01\n  vcli start web01\n  vcli snapshot create web01 pre-upgrade\n  vcli clone web01 web01-copy --datastore fast-ssd\n  vcli migrate web01 --host esx02.example.com\n"
)]
pub struct Cli {
    /// Path to a custom configuration file (overrides the search order)
    #[arg(long, global = true, env = "VCLI_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// vCenter hostname or IP (overrides the config file)
    #[arg(long, global = true, env = "VCLI_HOST")]
    pub host: Option<String>,

    /// vCenter management port
    #[arg(long, global = true, env = "VCLI_PORT", value_parser = clap::value_parser!(u16).range(1..))]
    pub port: Option<u16>,

    /// Login username (overrides the config file)
    #[arg(short, long, global = true, env = "VCLI_USERNAME")]
    pub username: Option<String>,

    /// Verify the vCenter TLS certificate (verification is off by default,
    /// most vCenter installs run self-signed certificates)
    #[arg(long, global = true, env = "VCLI_VERIFY_TLS")]
    pub verify_tls: bool,

    /// Request timeout in seconds
    #[arg(long, global = true, env = "VCLI_TIMEOUT")]
    pub timeout: Option<u64>,

    /// Output format (table, json)
    #[arg(short, long, global = true, default_value = "table")]
    pub output: String,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encrypt a plaintext password for the config file
    Encrypt,

    /// Display tabular list of an object type
    List {
        #[command(subcommand)]
        target: ListTarget,
    },

    /// Display information about a VM
    Info {
        /// VM name
        vm: String,
    },

    /// Power on a VM (also resumes a suspended one)
    #[command(visible_alias = "resume")]
    Start {
        /// VM name
        vm: String,
    },

    /// Power off a VM (hard)
    Stop {
        /// VM name
        vm: String,
    },

    /// Suspend a VM
    Suspend {
        /// VM name
        vm: String,
    },

    /// Forcefully reset a VM (power off then on)
    Reset {
        /// VM name
        vm: String,
    },

    /// Gracefully shut down the guest OS
    Shutdown {
        /// VM name
        vm: String,
    },

    /// Gracefully reboot the guest OS
    Reboot {
        /// VM name
        vm: String,
    },

    /// Manage VM snapshots
    Snapshot {
        #[command(subcommand)]
        command: SnapshotCommand,
    },

    /// Create a new clone of a VM
    Clone {
        /// Source VM name
        vm: String,
        /// Name for the new VM
        name: String,
        /// Target datastore name
        #[arg(long)]
        datastore: Option<String>,
        /// Target host name
        #[arg(long)]
        host: Option<String>,
        /// Power on the clone after creation
        #[arg(long)]
        power_on: bool,
    },

    /// Migrate a VM to another host and/or datastore
    Migrate {
        /// VM name
        vm: String,
        /// Target host name
        #[arg(long)]
        host: Option<String>,
        /// Target datastore name
        #[arg(long)]
        datastore: Option<String>,
    },

    /// Destroy a VM and its disks
    Destroy {
        /// VM name
        vm: String,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
pub enum ListTarget {
    /// Virtual machines
    Vm {
        /// Filter by exact VM name
        #[arg(long)]
        name: Option<String>,
    },
    /// Hypervisor hosts
    Host,
    /// Datastores
    Datastore,
    /// Networks
    Network,
    /// Clusters
    Cluster,
    /// Datacenters
    Datacenter,
    /// Resource pools
    Rp,
    /// Snapshots of a VM
    Snapshot {
        /// VM name
        vm: String,
    },
}

#[derive(Subcommand)]
pub enum SnapshotCommand {
    /// Create a snapshot
    Create {
        /// VM name
        vm: String,
        /// Snapshot name
        name: String,
        /// Snapshot description
        #[arg(long)]
        description: Option<String>,
    },
    /// List snapshots of a VM
    List {
        /// VM name
        vm: String,
    },
    /// Revert a VM to a snapshot
    Revert {
        /// VM name
        vm: String,
        /// Snapshot name
        snapshot: String,
    },
    /// Remove a snapshot
    Remove {
        /// VM name
        vm: String,
        /// Snapshot name
        snapshot: String,
    },
}
