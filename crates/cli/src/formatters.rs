//! Output formatting for CLI results.
//!
//! Responsibilities:
//! - Parse the `--output` flag.
//! - Render fixed-width tables for inventory listings.
//! - Serialize results as pretty JSON for machine consumption.

use anyhow::{Result, bail};
use serde::Serialize;
use vcli_client::models::{
    ClusterSummary, DatacenterSummary, DatastoreSummary, HostSummary, NetworkSummary,
    ResourcePoolSummary, SnapshotSummary, VmInfo, VmSummary,
};

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
}

impl OutputFormat {
    pub fn parse(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            other => bail!("unsupported output format '{}' (expected table or json)", other),
        }
    }
}

/// Print items in the requested format.
pub fn output<T: Serialize>(items: &T, format: OutputFormat, table: Table) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(items)?),
        OutputFormat::Table => print!("{}", table.render()),
    }
    Ok(())
}

/// A simple fixed-width text table.
pub struct Table {
    headers: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(headers: Vec<&'static str>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Render with columns padded to the widest cell, a dash rule under the
    /// header, and a trailing newline.
    pub fn render(&self) -> String {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.len()).collect();
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                if cell.len() > widths[i] {
                    widths[i] = cell.len();
                }
            }
        }

        let mut out = String::new();
        render_line(&mut out, &self.headers.iter().map(|h| h.to_string()).collect::<Vec<_>>(), &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        render_line(&mut out, &rule, &widths);
        for row in &self.rows {
            render_line(&mut out, row, &widths);
        }
        out
    }
}

fn render_line(out: &mut String, cells: &[String], widths: &[usize]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(cell);
        // No padding after the last column.
        if i + 1 < cells.len() {
            for _ in cell.len()..widths[i] {
                out.push(' ');
            }
        }
    }
    out.push('\n');
}

fn opt_string<T: ToString>(value: &Option<T>) -> String {
    value.as_ref().map(|v| v.to_string()).unwrap_or_default()
}

fn gib(bytes: Option<u64>) -> String {
    bytes
        .map(|b| format!("{:.1}", b as f64 / (1024.0 * 1024.0 * 1024.0)))
        .unwrap_or_default()
}

pub fn vm_table(vms: &[VmSummary]) -> Table {
    let mut table = Table::new(vec!["NAME", "ID", "POWER", "CPU", "MEM (MiB)"]);
    for vm in vms {
        table.push_row(vec![
            vm.name.clone(),
            vm.vm.clone(),
            vm.power_state.to_string(),
            opt_string(&vm.cpu_count),
            opt_string(&vm.memory_size_mib),
        ]);
    }
    table
}

pub fn host_table(hosts: &[HostSummary]) -> Table {
    let mut table = Table::new(vec!["NAME", "ID", "CONNECTION", "POWER"]);
    for host in hosts {
        table.push_row(vec![
            host.name.clone(),
            host.host.clone(),
            host.connection_state.clone(),
            opt_string(&host.power_state),
        ]);
    }
    table
}

pub fn datastore_table(datastores: &[DatastoreSummary]) -> Table {
    let mut table = Table::new(vec!["NAME", "ID", "TYPE", "CAPACITY (GiB)", "FREE (GiB)"]);
    for ds in datastores {
        table.push_row(vec![
            ds.name.clone(),
            ds.datastore.clone(),
            ds.kind.clone(),
            gib(ds.capacity),
            gib(ds.free_space),
        ]);
    }
    table
}

pub fn network_table(networks: &[NetworkSummary]) -> Table {
    let mut table = Table::new(vec!["NAME", "ID", "TYPE"]);
    for net in networks {
        table.push_row(vec![net.name.clone(), net.network.clone(), net.kind.clone()]);
    }
    table
}

pub fn cluster_table(clusters: &[ClusterSummary]) -> Table {
    let mut table = Table::new(vec!["NAME", "ID", "HA", "DRS"]);
    for cluster in clusters {
        table.push_row(vec![
            cluster.name.clone(),
            cluster.cluster.clone(),
            cluster.ha_enabled.to_string(),
            cluster.drs_enabled.to_string(),
        ]);
    }
    table
}

pub fn datacenter_table(datacenters: &[DatacenterSummary]) -> Table {
    let mut table = Table::new(vec!["NAME", "ID"]);
    for dc in datacenters {
        table.push_row(vec![dc.name.clone(), dc.datacenter.clone()]);
    }
    table
}

pub fn resource_pool_table(pools: &[ResourcePoolSummary]) -> Table {
    let mut table = Table::new(vec!["NAME", "ID"]);
    for pool in pools {
        table.push_row(vec![pool.name.clone(), pool.resource_pool.clone()]);
    }
    table
}

pub fn snapshot_table(snapshots: &[SnapshotSummary]) -> Table {
    let mut table = Table::new(vec!["NAME", "ID", "DESCRIPTION"]);
    for snap in snapshots {
        table.push_row(vec![
            snap.name.clone(),
            snap.snapshot.clone(),
            opt_string(&snap.description),
        ]);
    }
    table
}

pub fn vm_info_table(info: &VmInfo) -> Table {
    let mut table = Table::new(vec!["FIELD", "VALUE"]);
    table.push_row(vec!["name".to_string(), info.name.clone()]);
    table.push_row(vec!["power".to_string(), info.power_state.to_string()]);
    table.push_row(vec!["guest os".to_string(), opt_string(&info.guest_os)]);
    table.push_row(vec!["cpu count".to_string(), info.cpu.count.to_string()]);
    table.push_row(vec![
        "memory (MiB)".to_string(),
        info.memory.size_mib.to_string(),
    ]);
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use vcli_client::models::PowerState;

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("table").unwrap(), OutputFormat::Table);
        assert_eq!(OutputFormat::parse("JSON").unwrap(), OutputFormat::Json);
        assert!(OutputFormat::parse("xml").is_err());
    }

    #[test]
    fn test_table_pads_columns() {
        let mut table = Table::new(vec!["A", "LONGHEADER"]);
        table.push_row(vec!["wide-cell".to_string(), "x".to_string()]);
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "A          LONGHEADER");
        assert_eq!(lines[1], "---------  ----------");
        assert_eq!(lines[2], "wide-cell  x");
    }

    #[test]
    fn test_vm_table_rows() {
        let vms = vec![VmSummary {
            vm: "vm-1".to_string(),
            name: "web01".to_string(),
            power_state: PowerState::PoweredOn,
            cpu_count: Some(2),
            memory_size_mib: None,
        }];
        let rendered = vm_table(&vms).render();
        assert!(rendered.contains("web01"));
        assert!(rendered.contains("poweredOn"));
    }

    #[test]
    fn test_datastore_table_converts_to_gib() {
        let datastores = vec![DatastoreSummary {
            datastore: "ds-1".to_string(),
            name: "fast-ssd".to_string(),
            kind: "VMFS".to_string(),
            capacity: Some(2 * 1024 * 1024 * 1024),
            free_space: None,
        }];
        let rendered = datastore_table(&datastores).render();
        assert!(rendered.contains("2.0"));
    }
}
