// Copyright (c) 2025 - Cowboy AI, Inc.
//! Graph nodes, edges and the graph container

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::domain::{
    ConnectionType, Machine, NetworkDevice, NodeKind, TopologyNode, VirtualMachine,
};
use crate::validation::Finding;

/// Identity of one built graph
///
/// Every load produces a new id, so a caller holding an older snapshot can
/// tell it apart from the one currently published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TopologyId(Uuid);

impl TopologyId {
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for TopologyId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TopologyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Source record a node was built from
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeDetails {
    Machine(Machine),
    Device(NetworkDevice),
}

/// A vertex of the topology graph
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphNode {
    pub name: String,
    pub ip_address: String,
    pub kind: NodeKind,
    pub details: NodeDetails,
}

impl GraphNode {
    pub fn from_machine(machine: &Machine) -> Self {
        Self {
            name: machine.name().to_string(),
            ip_address: machine.ip_address().to_string(),
            kind: NodeKind::Machine,
            details: NodeDetails::Machine(machine.clone()),
        }
    }

    pub fn from_device(device: &NetworkDevice) -> Self {
        Self {
            name: device.name().to_string(),
            ip_address: device.ip_address().to_string(),
            kind: NodeKind::Device,
            details: NodeDetails::Device(device.clone()),
        }
    }

    /// VMs hosted on this node; always empty for devices
    pub fn vms(&self) -> &[VirtualMachine] {
        match &self.details {
            NodeDetails::Machine(machine) => &machine.software.vms,
            NodeDetails::Device(_) => &[],
        }
    }

    pub fn port_names(&self) -> impl Iterator<Item = &str> {
        let ports = match &self.details {
            NodeDetails::Machine(machine) => machine.ports(),
            NodeDetails::Device(device) => device.ports(),
        };
        ports.iter().map(|p| p.port_name.as_str())
    }

    pub fn has_port(&self, port_name: &str) -> bool {
        self.port_names().any(|p| p == port_name)
    }
}

/// Port end of an edge on the target side
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "port", rename_all = "snake_case")]
pub enum TargetPort {
    /// The connection did not name a port
    Unspecified,
    /// Named port exists on the target node
    Resolved(String),
    /// Named port was not found on the target node
    Unresolved(String),
}

impl TargetPort {
    /// Port name, only when it resolved
    pub fn resolved(&self) -> Option<&str> {
        match self {
            TargetPort::Resolved(name) => Some(name),
            _ => None,
        }
    }
}

/// One resolved connection
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    /// Position in creation order
    pub index: usize,
    pub source_node: String,
    pub source_port: String,
    pub target_node: String,
    pub target_port: TargetPort,
    pub capacity_gbps: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_type: Option<ConnectionType>,
    #[serde(skip)]
    pub(crate) source_ix: usize,
    #[serde(skip)]
    pub(crate) target_ix: usize,
}

impl Edge {
    pub fn is_self_loop(&self) -> bool {
        self.source_ix == self.target_ix
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{} -> {} ({} Gbps)",
            self.source_node, self.source_port, self.target_node, self.capacity_gbps
        )
    }
}

/// Counts and identity of a graph, for presentation layers
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopologySummary {
    pub id: TopologyId,
    pub built_at: DateTime<Utc>,
    pub machines: usize,
    pub devices: usize,
    pub edges: usize,
    pub advisories: usize,
}

/// Immutable topology graph
#[derive(Debug, Clone)]
pub struct TopologyGraph {
    id: TopologyId,
    built_at: DateTime<Utc>,
    nodes: IndexMap<String, GraphNode>,
    edges: Vec<Edge>,
    outgoing: Vec<Vec<usize>>,
    incoming: Vec<Vec<usize>>,
    advisories: Vec<Finding>,
}

impl TopologyGraph {
    pub(crate) fn with_nodes(nodes: IndexMap<String, GraphNode>, advisories: Vec<Finding>) -> Self {
        let node_count = nodes.len();
        Self {
            id: TopologyId::new(),
            built_at: Utc::now(),
            nodes,
            edges: Vec::new(),
            outgoing: vec![Vec::new(); node_count],
            incoming: vec![Vec::new(); node_count],
            advisories,
        }
    }

    /// A graph with no nodes, as published before the first load
    pub fn empty() -> Self {
        Self::with_nodes(IndexMap::new(), Vec::new())
    }

    pub(crate) fn push_edge(&mut self, mut edge: Edge) {
        let index = self.edges.len();
        edge.index = index;
        self.outgoing[edge.source_ix].push(index);
        self.incoming[edge.target_ix].push(index);
        self.edges.push(edge);
    }

    pub(crate) fn node_index(&self, name: &str) -> Option<usize> {
        self.nodes.get_index_of(name)
    }

    pub(crate) fn node_has_port(&self, ix: usize, port_name: &str) -> bool {
        self.nodes
            .get_index(ix)
            .is_some_and(|(_, node)| node.has_port(port_name))
    }

    pub(crate) fn outgoing_of(&self, ix: usize) -> &[usize] {
        &self.outgoing[ix]
    }

    pub(crate) fn incoming_of(&self, ix: usize) -> &[usize] {
        &self.incoming[ix]
    }

    pub fn id(&self) -> TopologyId {
        self.id
    }

    pub fn built_at(&self) -> DateTime<Utc> {
        self.built_at
    }

    pub fn node(&self, name: &str) -> Option<&GraphNode> {
        self.nodes.get(name)
    }

    pub fn contains_node(&self, name: &str) -> bool {
        self.nodes.contains_key(name)
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values()
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> impl Iterator<Item = &GraphNode> {
        self.nodes.values().filter(move |n| n.kind == kind)
    }

    /// Edges in creation order
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, index: usize) -> Option<&Edge> {
        self.edges.get(index)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Advisory findings from the validation that produced this graph
    pub fn advisories(&self) -> &[Finding] {
        &self.advisories
    }

    /// True when the graph loaded with warnings
    pub fn has_warnings(&self) -> bool {
        !self.advisories.is_empty()
    }

    pub fn summary(&self) -> TopologySummary {
        TopologySummary {
            id: self.id,
            built_at: self.built_at,
            machines: self.nodes_of_kind(NodeKind::Machine).count(),
            devices: self.nodes_of_kind(NodeKind::Device).count(),
            edges: self.edges.len(),
            advisories: self.advisories.len(),
        }
    }
}

impl Default for TopologyGraph {
    fn default() -> Self {
        Self::empty()
    }
}
