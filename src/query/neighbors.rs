// Copyright (c) 2025 - Cowboy AI, Inc.
//! Neighbor lookup

use super::Direction;
use crate::graph::{Edge, TopologyGraph};

impl TopologyGraph {
    /// Edges touching `node` in the given direction, in creation order
    ///
    /// With [`Direction::Both`] a self-loop is returned once.
    pub fn neighbors(&self, node: &str, direction: Direction) -> Vec<&Edge> {
        match self.node_index(node) {
            Some(ix) => self
                .edge_indices(ix, direction)
                .into_iter()
                .map(|e| &self.edges()[e])
                .collect(),
            None => Vec::new(),
        }
    }

    /// Edge positions touching node `ix`, ascending
    pub(crate) fn edge_indices(&self, ix: usize, direction: Direction) -> Vec<usize> {
        match direction {
            Direction::Outgoing => self.outgoing_of(ix).to_vec(),
            Direction::Incoming => self.incoming_of(ix).to_vec(),
            Direction::Both => merge_ascending(self.outgoing_of(ix), self.incoming_of(ix)),
        }
    }
}

/// Merge two ascending index lists, dropping values present in both
fn merge_ascending(a: &[usize], b: &[usize]) -> Vec<usize> {
    let mut merged = Vec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);

    while i < a.len() && j < b.len() {
        if a[i] < b[j] {
            merged.push(a[i]);
            i += 1;
        } else if b[j] < a[i] {
            merged.push(b[j]);
            j += 1;
        } else {
            merged.push(a[i]);
            i += 1;
            j += 1;
        }
    }
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);
    merged
}
