// Copyright (c) 2025 - Cowboy AI, Inc.
//! Caller-owned holder of the published topology
//!
//! Readers take an `Arc` snapshot and keep using it for as long as they
//! like; a load swaps the reference in one step, so no reader ever sees a
//! partially built graph. The lock guards only the pointer swap.

use std::sync::{Arc, PoisonError, RwLock};
use tracing::{info, warn};

use crate::domain::Inventory;
use crate::errors::TopologyResult;
use crate::graph::TopologyGraph;
use crate::loader::{TopologyLoad, TopologyLoader};

/// Holds the most recently published graph
#[derive(Debug)]
pub struct TopologyStore {
    current: RwLock<Arc<TopologyGraph>>,
}

impl TopologyStore {
    /// Store publishing an empty graph
    pub fn new() -> Self {
        Self::with_graph(Arc::new(TopologyGraph::empty()))
    }

    pub fn with_graph(graph: Arc<TopologyGraph>) -> Self {
        Self {
            current: RwLock::new(graph),
        }
    }

    /// Snapshot of the published graph
    pub fn current(&self) -> Arc<TopologyGraph> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Publish `graph`, returning the one it replaced
    pub fn replace(&self, graph: Arc<TopologyGraph>) -> Arc<TopologyGraph> {
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        let previous = std::mem::replace(&mut *current, graph);
        info!(
            previous = %previous.id(),
            current = %current.id(),
            "Published topology"
        );
        previous
    }

    /// Load `raw` and publish the result when usable
    ///
    /// An unusable load leaves the published graph untouched; its findings
    /// are still returned.
    pub fn load(&self, loader: &TopologyLoader, raw: Inventory) -> TopologyResult<TopologyLoad> {
        let load = loader.load(raw)?;
        match &load.graph {
            Some(graph) => {
                self.replace(Arc::clone(graph));
            }
            None => warn!("Keeping previously published topology"),
        }
        Ok(load)
    }
}

impl Default for TopologyStore {
    fn default() -> Self {
        Self::new()
    }
}
