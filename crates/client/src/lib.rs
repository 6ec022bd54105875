//! vCenter Automation REST API client.
//!
//! This crate is the session-establishment collaborator of the workspace: it
//! logs in with the resolved connection credentials and exposes the VM
//! inventory, power, snapshot, clone, and relocate operations the CLI
//! invokes. It never retries a failed authentication and never touches the
//! configuration file.

mod client;
mod error;
pub mod models;

pub use client::{VcenterClient, VcenterClientBuilder};
pub use error::{ClientError, Result};
