// Copyright (c) 2025 - Cowboy AI, Inc.
//! Graph construction from a validated inventory

use indexmap::IndexMap;
use tracing::info;

use super::model::{Edge, GraphNode, TargetPort, TopologyGraph};
use crate::domain::speed;
use crate::errors::{TopologyError, TopologyResult};
use crate::normalizer::NormalizedInventory;
use crate::validation::ValidationReport;

/// Build the topology graph
///
/// `report` must be the validation of `normalized`. Passing a report with
/// fatal findings is caller misuse and returns
/// [`TopologyError::UnusableInventory`] rather than a partial graph.
pub fn build_graph(
    normalized: &NormalizedInventory,
    report: &ValidationReport,
) -> TopologyResult<TopologyGraph> {
    if !report.is_usable() {
        return Err(TopologyError::UnusableInventory {
            fatal_count: report.fatal_count(),
        });
    }

    let inventory = normalized.inventory();

    let mut nodes = IndexMap::with_capacity(inventory.node_count());
    for machine in &inventory.machines {
        nodes.insert(machine.machine_name.clone(), GraphNode::from_machine(machine));
    }
    for device in &inventory.devices {
        nodes.insert(device.name.clone(), GraphNode::from_device(device));
    }
    if nodes.len() != inventory.node_count() {
        return Err(TopologyError::ReportMismatch(
            "inventory contains duplicate node names".to_string(),
        ));
    }

    let mut graph = TopologyGraph::with_nodes(nodes, report.advisories().cloned().collect());

    for node in inventory.nodes() {
        let source_ix = graph
            .node_index(node.name())
            .ok_or_else(|| unknown_node(node.name()))?;

        for port in node.ports() {
            for connection in port.connections() {
                let target_name = connection.target_device.as_str();
                let target_ix = graph
                    .node_index(target_name)
                    .ok_or_else(|| unknown_node(target_name))?;

                let target_port = match &connection.target_port {
                    None => TargetPort::Unspecified,
                    Some(name) if graph.node_has_port(target_ix, name) => {
                        TargetPort::Resolved(name.clone())
                    }
                    Some(name) => TargetPort::Unresolved(name.clone()),
                };

                graph.push_edge(Edge {
                    index: 0,
                    source_node: node.name().to_string(),
                    source_port: port.port_name.clone(),
                    target_node: connection.target_device.clone(),
                    target_port,
                    capacity_gbps: speed::effective_speed(
                        connection.speed_gbps,
                        port.speed_gbps,
                        node.default_port_speed(),
                    ),
                    connection_type: connection.connection_type,
                    source_ix,
                    target_ix,
                });
            }
        }
    }

    info!(
        topology_id = %graph.id(),
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        advisories = graph.advisories().len(),
        "Built topology graph"
    );

    Ok(graph)
}

fn unknown_node(name: &str) -> TopologyError {
    TopologyError::ReportMismatch(format!("unknown node '{}'", name))
}
