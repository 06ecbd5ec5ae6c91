// Copyright (c) 2025 - Cowboy AI, Inc.
//! Load pipeline: normalize → validate → build
//!
//! ```rust
//! use cim_network_topology::{load_topology_json, Direction};
//!
//! let json = r#"{
//!     "machines": [],
//!     "devices": [
//!         { "name": "R1", "ipAddress": "10.0.0.1", "type": "router",
//!           "ports": [ { "portName": "lan", "speedGbps": 10, "connectedTo": "SW1" } ] },
//!         { "name": "SW1", "ipAddress": "10.0.0.2", "type": "switch" }
//!     ]
//! }"#;
//!
//! let load = load_topology_json(json).unwrap();
//! let graph = load.graph.expect("usable inventory");
//! assert_eq!(graph.aggregate_capacity("SW1", Direction::Incoming), 10.0);
//! ```

use serde::Serialize;
use std::sync::Arc;
use tracing::{info, warn};

use crate::config::TopologyConfig;
use crate::domain::Inventory;
use crate::errors::TopologyResult;
use crate::graph::{build_graph, TopologyGraph};
use crate::normalizer::normalize;
use crate::validation::{Finding, Validator};

/// Result of one load: the graph when usable, and every finding
#[derive(Debug, Clone, Serialize)]
pub struct TopologyLoad {
    #[serde(skip)]
    pub graph: Option<Arc<TopologyGraph>>,
    pub findings: Vec<Finding>,
}

impl TopologyLoad {
    pub fn is_usable(&self) -> bool {
        self.graph.is_some()
    }

    pub fn fatal_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_fatal())
    }

    pub fn advisory_findings(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.is_advisory())
    }

    /// Usable, but with advisory findings to surface
    pub fn has_warnings(&self) -> bool {
        self.is_usable() && self.advisory_findings().next().is_some()
    }
}

/// Runs the load pipeline under a [`TopologyConfig`]
#[derive(Debug, Clone, Default)]
pub struct TopologyLoader {
    config: TopologyConfig,
}

impl TopologyLoader {
    pub fn new(config: TopologyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TopologyConfig {
        &self.config
    }

    /// Load a parsed inventory
    pub fn load(&self, raw: Inventory) -> TopologyResult<TopologyLoad> {
        let normalized = normalize(raw);
        let report = Validator::new()
            .with_strict_mode(self.config.strict_mode)
            .validate(&normalized);

        if !report.is_usable() {
            warn!(
                fatal = report.fatal_count(),
                findings = report.findings().len(),
                "Topology not loaded: inventory has fatal findings"
            );
            return Ok(TopologyLoad {
                graph: None,
                findings: report.into_findings(),
            });
        }

        let graph = build_graph(&normalized, &report)?;
        info!(
            topology_id = %graph.id(),
            warnings = graph.advisories().len(),
            "Topology loaded"
        );

        Ok(TopologyLoad {
            graph: Some(Arc::new(graph)),
            findings: report.into_findings(),
        })
    }

    /// Parse and load an inventory from JSON text
    pub fn load_json(&self, json: &str) -> TopologyResult<TopologyLoad> {
        self.load(Inventory::from_json(json)?)
    }
}

/// Load with the default configuration
pub fn load_topology(raw: Inventory) -> TopologyResult<TopologyLoad> {
    TopologyLoader::default().load(raw)
}

/// Parse and load JSON with the default configuration
pub fn load_topology_json(json: &str) -> TopologyResult<TopologyLoad> {
    TopologyLoader::default().load_json(json)
}
