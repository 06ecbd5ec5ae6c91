// Copyright (c) 2025 - Cowboy AI, Inc.
//! Topology Graph
//!
//! An immutable directed multigraph built from a validated inventory.
//!
//! - **Nodes**: one per machine and per network device, keyed by name
//! - **Edges**: one per declared connection, directed from the owning port
//!   to the target node, carrying effective capacity and connection type
//!
//! Reciprocal declarations are kept as two distinct edges; symmetry is
//! never inferred. Edges keep the order in which the builder created them,
//! which is the inventory's declaration order (machines first, then
//! devices, then ports, then connections).
//!
//! A [`TopologyGraph`] is `Send + Sync` and never changes after
//! construction; share it behind an `Arc`.

pub mod builder;
pub mod model;

pub use builder::build_graph;
pub use model::{
    Edge, GraphNode, NodeDetails, TargetPort, TopologyGraph, TopologyId, TopologySummary,
};
