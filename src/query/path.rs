// Copyright (c) 2025 - Cowboy AI, Inc.
//! Path discovery
//!
//! - **Hop count**: breadth-first search
//! - **Capacity**: widest path, a Dijkstra variant that maximizes the
//!   smallest edge capacity along the route
//!
//! Both expand a node's edges in [`neighbors`](TopologyGraph::neighbors)
//! order and only replace a recorded route on strict improvement, so ties
//! resolve to the edge created first.
//!
//! Paths follow edge direction by default. [`Direction::Both`] traverses
//! links regardless of which side declared them; [`Direction::Incoming`]
//! walks edges backwards.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, VecDeque};

use super::{Direction, WeightMode};
use crate::graph::{Edge, TopologyGraph};

/// Ordered edges from source to target
#[derive(Debug, Clone, PartialEq)]
pub struct Path<'g> {
    edges: Vec<&'g Edge>,
}

impl<'g> Path<'g> {
    pub fn edges(&self) -> &[&'g Edge] {
        &self.edges
    }

    pub fn hop_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Smallest capacity along the path; `None` for the empty path
    pub fn bottleneck_gbps(&self) -> Option<f64> {
        self.edges
            .iter()
            .map(|e| e.capacity_gbps)
            .min_by(|a, b| a.total_cmp(b))
    }
}

/// Outcome of a path query
#[derive(Debug, Clone, PartialEq)]
pub enum PathResult<'g> {
    Found(Path<'g>),
    NoPath,
}

impl<'g> PathResult<'g> {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found(_))
    }

    pub fn path(&self) -> Option<&Path<'g>> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NoPath => None,
        }
    }

    pub fn into_path(self) -> Option<Path<'g>> {
        match self {
            PathResult::Found(path) => Some(path),
            PathResult::NoPath => None,
        }
    }
}

/// `(edge, previous node)` used to reach a node
type Via = Option<(usize, usize)>;

impl TopologyGraph {
    /// Shortest path along edge direction
    ///
    /// A node reaches itself by the empty path.
    pub fn find_path(&self, source: &str, target: &str, mode: WeightMode) -> PathResult<'_> {
        self.find_path_with(source, target, mode, Direction::Outgoing)
    }

    /// Shortest path, traversing edges in the given direction
    pub fn find_path_with(
        &self,
        source: &str,
        target: &str,
        mode: WeightMode,
        direction: Direction,
    ) -> PathResult<'_> {
        let (Some(from), Some(to)) = (self.node_index(source), self.node_index(target)) else {
            return PathResult::NoPath;
        };
        if from == to {
            return PathResult::Found(Path { edges: Vec::new() });
        }

        let via = match mode {
            WeightMode::HopCount => self.breadth_first(from, to, direction),
            WeightMode::Capacity => self.widest(from, to, direction),
        };
        self.reconstruct(&via, from, to)
    }

    /// Node reached from `from` by crossing `edge` in `direction`
    fn far_end(&self, edge: &Edge, from: usize, direction: Direction) -> usize {
        match direction {
            Direction::Outgoing => edge.target_ix,
            Direction::Incoming => edge.source_ix,
            Direction::Both if edge.source_ix == from => edge.target_ix,
            Direction::Both => edge.source_ix,
        }
    }

    fn breadth_first(&self, from: usize, to: usize, direction: Direction) -> Vec<Via> {
        let mut via: Vec<Via> = vec![None; self.node_count()];
        let mut visited = vec![false; self.node_count()];
        let mut queue = VecDeque::from([from]);
        visited[from] = true;

        while let Some(current) = queue.pop_front() {
            if current == to {
                break;
            }
            for e in self.edge_indices(current, direction) {
                let next = self.far_end(&self.edges()[e], current, direction);
                if !visited[next] {
                    visited[next] = true;
                    via[next] = Some((e, current));
                    queue.push_back(next);
                }
            }
        }
        via
    }

    fn widest(&self, from: usize, to: usize, direction: Direction) -> Vec<Via> {
        let mut via: Vec<Via> = vec![None; self.node_count()];
        let mut best: Vec<Option<f64>> = vec![None; self.node_count()];
        let mut settled = vec![false; self.node_count()];
        let mut heap = BinaryHeap::new();
        let mut sequence = 0u64;

        best[from] = Some(f64::INFINITY);
        heap.push(Frontier {
            width: f64::INFINITY,
            sequence,
            node: from,
        });

        while let Some(Frontier { width, node, .. }) = heap.pop() {
            if settled[node] {
                continue;
            }
            settled[node] = true;
            if node == to {
                break;
            }

            for e in self.edge_indices(node, direction) {
                let edge = &self.edges()[e];
                let next = self.far_end(edge, node, direction);
                if settled[next] {
                    continue;
                }
                let candidate = width.min(edge.capacity_gbps);
                if best[next].map_or(true, |current| candidate > current) {
                    best[next] = Some(candidate);
                    via[next] = Some((e, node));
                    sequence += 1;
                    heap.push(Frontier {
                        width: candidate,
                        sequence,
                        node: next,
                    });
                }
            }
        }
        via
    }

    fn reconstruct(&self, via: &[Via], from: usize, to: usize) -> PathResult<'_> {
        let mut edges = Vec::new();
        let mut current = to;

        while current != from {
            match via[current] {
                Some((e, previous)) => {
                    edges.push(&self.edges()[e]);
                    current = previous;
                }
                None => return PathResult::NoPath,
            }
        }
        edges.reverse();
        PathResult::Found(Path { edges })
    }
}

/// Widest-path queue entry: wider first, then earlier discovery
#[derive(Debug)]
struct Frontier {
    width: f64,
    sequence: u64,
    node: usize,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.width
            .total_cmp(&other.width)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}
