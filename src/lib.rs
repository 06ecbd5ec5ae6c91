// Copyright (c) 2025 - Cowboy AI, Inc.
//! Network topology engine for the Composable Information Machine
//!
//! Turns a declarative inventory of machines, network devices, ports and
//! links into a validated, immutable graph that answers neighbor, path and
//! capacity queries.
//!
//! # Pipeline
//!
//! ```text
//! Inventory ──normalize──> NormalizedInventory ──validate──> ValidationReport
//!                                   │                              │
//!                                   └──────────build_graph─────────┘
//!                                                 │
//!                                                 ▼
//!                                   TopologyGraph (+ advisory findings)
//! ```
//!
//! [`TopologyLoader`] runs the whole pipeline; [`TopologyStore`] publishes
//! the latest usable graph to concurrent readers.

pub mod config;
pub mod domain;
pub mod errors;
pub mod graph;
pub mod loader;
pub mod normalizer;
pub mod query;
pub mod source;
pub mod store;
pub mod validation;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::TopologyConfig;
pub use domain::{
    Connection, ConnectionType, Hardware, Inventory, Machine, NetworkDevice, NodeKind, Port,
    TopologyNode, VirtualMachine,
};
pub use errors::{TopologyError, TopologyResult};
pub use graph::{Edge, GraphNode, TargetPort, TopologyGraph, TopologyId};
pub use loader::{load_topology, load_topology_json, TopologyLoad, TopologyLoader};
pub use normalizer::{normalize, NormalizedInventory};
pub use query::{Direction, Path, PathResult, WeightMode};
pub use source::read_inventory;
pub use store::TopologyStore;
pub use validation::{Finding, FindingKind, Severity, ValidationReport, Validator};
