// Copyright (c) 2025 - Cowboy AI, Inc.
//! Aggregate capacity

use super::Direction;
use crate::graph::TopologyGraph;

impl TopologyGraph {
    /// Sum of effective speeds over the node's edges in `direction`
    ///
    /// Zero for unknown nodes and nodes without matching edges.
    pub fn aggregate_capacity(&self, node: &str, direction: Direction) -> f64 {
        self.neighbors(node, direction)
            .iter()
            .map(|e| e.capacity_gbps)
            .sum()
    }
}
