// Copyright (c) 2025 - Cowboy AI, Inc.
//! Topology Inspector
//!
//! Loads the network inventory file, runs the topology pipeline and prints
//! a JSON report of the resulting graph and every finding.
//!
//! Run with: cargo run --bin topology-inspect [-- <path/to/network.json>]
//!
//! Environment:
//! - `NETWORK_DATA_PATH` - inventory file (default `/data/network.json`),
//!   overridden by the first argument
//! - `TOPOLOGY_STRICT` - treat advisory findings as fatal
//! - `RUST_LOG` - log filter

use anyhow::{Context, Result};
use cim_network_topology::{
    graph::TopologySummary, read_inventory, Finding, TopologyConfig, TopologyLoader,
};
use serde::Serialize;
use tracing::{error, info};

/// Report printed to stdout
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InspectionReport {
    source: String,
    usable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<TopologySummary>,
    findings: Vec<Finding>,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut config = TopologyConfig::from_env().context("Invalid topology configuration")?;
    if let Some(path) = std::env::args().nth(1) {
        config.data_path = path.into();
    }

    info!("Inspecting topology from {}", config.data_path().display());

    let inventory = read_inventory(config.data_path())
        .with_context(|| format!("Failed to load {}", config.data_path().display()))?;
    let load = TopologyLoader::new(config.clone()).load(inventory)?;

    let report = InspectionReport {
        source: config.data_path().display().to_string(),
        usable: load.is_usable(),
        summary: load.graph.as_ref().map(|g| g.summary()),
        findings: load.findings.clone(),
    };
    println!("{}", serde_json::to_string_pretty(&report)?);

    if !report.usable {
        error!(
            fatal = load.fatal_findings().count(),
            "Topology could not be loaded"
        );
        std::process::exit(1);
    }

    Ok(())
}
