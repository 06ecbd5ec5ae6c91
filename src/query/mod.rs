// Copyright (c) 2025 - Cowboy AI, Inc.
//! Read-only queries over a built [`TopologyGraph`](crate::graph::TopologyGraph)
//!
//! Every query is total: unknown node names produce empty results, zero
//! capacity, or [`PathResult::NoPath`], never an error.
//!
//! - [`TopologyGraph::neighbors`](crate::graph::TopologyGraph::neighbors)
//! - [`TopologyGraph::find_path`](crate::graph::TopologyGraph::find_path)
//! - [`TopologyGraph::aggregate_capacity`](crate::graph::TopologyGraph::aggregate_capacity)

pub mod capacity;
pub mod neighbors;
pub mod path;

use serde::{Deserialize, Serialize};

pub use path::{Path, PathResult};

/// Which edges touching a node to consider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Edges whose source is the node
    Outgoing,
    /// Edges whose target is the node
    Incoming,
    /// Either
    Both,
}

/// How path length is measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightMode {
    /// Fewest edges
    HopCount,
    /// Largest bottleneck capacity (widest path)
    Capacity,
}
