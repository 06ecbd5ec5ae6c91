// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inventory Root and the Node Capability

use serde::{Deserialize, Serialize};
use std::fmt;

use super::device::NetworkDevice;
use super::machine::Machine;
use super::port::Port;
use crate::errors::TopologyResult;

/// Concrete kind of a topology node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Machine,
    Device,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeKind::Machine => write!(f, "machine"),
            NodeKind::Device => write!(f, "device"),
        }
    }
}

/// Anything that can stand as a vertex in the topology graph
pub trait TopologyNode {
    fn name(&self) -> &str;

    fn ip_address(&self) -> &str;

    fn ports(&self) -> &[Port];

    fn kind(&self) -> NodeKind;

    /// Node-level default for ports without a declared speed
    fn default_port_speed(&self) -> Option<f64> {
        None
    }

    /// First port with the given name
    fn port(&self, port_name: &str) -> Option<&Port> {
        self.ports().iter().find(|p| p.port_name == port_name)
    }
}

/// The raw or normalized network inventory
///
/// Both top-level arrays default to empty, so `{}` and
/// `{"machines": [], "devices": []}` describe the same (empty) network.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Inventory {
    #[serde(default)]
    pub machines: Vec<Machine>,
    #[serde(default)]
    pub devices: Vec<NetworkDevice>,
}

impl Inventory {
    pub fn new(machines: Vec<Machine>, devices: Vec<NetworkDevice>) -> Self {
        Self { machines, devices }
    }

    /// Parse an inventory from JSON text
    pub fn from_json(json: &str) -> TopologyResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse an inventory from UTF-8 JSON bytes
    pub fn from_slice(bytes: &[u8]) -> TopologyResult<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }

    /// All nodes, machines first, each group in declaration order
    pub fn nodes(&self) -> impl Iterator<Item = &dyn TopologyNode> + '_ {
        self.machines
            .iter()
            .map(|m| m as &dyn TopologyNode)
            .chain(self.devices.iter().map(|d| d as &dyn TopologyNode))
    }

    /// First node with the given name
    pub fn node(&self, name: &str) -> Option<&dyn TopologyNode> {
        self.nodes().find(|n| n.name() == name)
    }

    pub fn node_count(&self) -> usize {
        self.machines.len() + self.devices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_count() == 0
    }
}
